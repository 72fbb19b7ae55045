/// Pairwise intersection. `None` means the operands share no point that the
/// implementation reports; segments, for instance, only report strict
/// crossings.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
