pub mod disjoint;
pub mod intersection;

#[doc(inline)]
pub use disjoint::{disjoint, disjoint_unchecked, intersects, simple_disjoint};

#[doc(inline)]
pub use intersection::line_intersections;
