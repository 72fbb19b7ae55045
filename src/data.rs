mod geometry;
mod line_segment;
mod line_string;
pub(crate) mod point;
pub mod polygon;

pub use geometry::*;
pub use line_segment::*;
pub use line_string::*;

#[doc(inline)]
pub use crate::data::polygon::Polygon;
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
