pub mod naive;

#[doc(inline)]
pub use naive::{line_intersections, segment_crossings, segments_cross};
