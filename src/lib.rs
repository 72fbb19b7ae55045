// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar disjoint predicates.
//!
//! Two geometries are disjoint when they share no point. The predicate is built
//! from a handful of floating-point primitives: strict segment crossing,
//! point-on-segment and boundary-inclusive point-in-polygon.
//!
//! ```rust
//! use planar_disjoint::algorithms::disjoint;
//! use planar_disjoint::data::{LineString, Point};
//!
//! let point = Point::new([2.0, 2.0]);
//! let line = LineString::new(vec![
//!   Point::new([1.0, 1.0]),
//!   Point::new([1.0, 2.0]),
//!   Point::new([1.0, 3.0]),
//!   Point::new([1.0, 4.0]),
//! ])
//! .unwrap();
//! assert_eq!(disjoint(&line, &point), Ok(true));
//! ```
use num_traits::Float;

pub mod algorithms;
pub mod data;
mod intersection;

pub use intersection::Intersects;

/// Reasons a geometry is rejected at the validated entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A line string has fewer than two points or a ring has fewer than four.
  InsufficientVertices,
  /// The first and last point of a ring differ.
  UnclosedRing,
  /// A polygon without any rings.
  MissingOuterRing,
  /// A coordinate is NaN or infinite.
  NonFiniteCoordinate,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::UnclosedRing => write!(f, "Ring is not closed"),
      Error::MissingOuterRing => write!(f, "Polygon has no outer ring"),
      Error::NonFiniteCoordinate => write!(f, "Coordinate is NaN or infinite"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate scalar. Comparisons are exact, there is no epsilon.
pub trait PlanarScalar: Float + std::fmt::Debug {}

impl PlanarScalar for f32 {}
impl PlanarScalar for f64 {}

#[cfg(test)]
pub mod testing;
