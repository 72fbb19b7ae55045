use crate::data::{LineSegmentView, LineString, Point};
use crate::{Intersects, PlanarScalar};

/// Strict crossings between every segment of `a` and every segment of `b`.
///
/// Segments touching at an endpoint or overlapping colinearly are not
/// reported.
///
/// # Time complexity
/// $O(n \cdot m)$
pub fn segment_crossings<'a, T, A, B>(a: A, b: B) -> impl Iterator<Item = Point<T>> + 'a
where
  T: PlanarScalar + 'a,
  A: IntoIterator<Item = LineSegmentView<'a, T>>,
  A::IntoIter: 'a,
  B: IntoIterator<Item = LineSegmentView<'a, T>>,
  B::IntoIter: Clone + 'a,
{
  let b = b.into_iter();
  a.into_iter()
    .flat_map(move |a_edge| b.clone().filter_map(move |b_edge| a_edge.intersect(b_edge)))
}

/// True if any segment of `a` strictly crosses any segment of `b`. Stops at
/// the first crossing.
pub fn segments_cross<'a, T, A, B>(a: A, b: B) -> bool
where
  T: PlanarScalar + 'a,
  A: IntoIterator<Item = LineSegmentView<'a, T>>,
  A::IntoIter: 'a,
  B: IntoIterator<Item = LineSegmentView<'a, T>>,
  B::IntoIter: Clone + 'a,
{
  segment_crossings(a, b).next().is_some()
}

/// All strict crossing points between two line strings, ordered by the
/// segments of `a` and then by the segments of `b`.
pub fn line_intersections<T: PlanarScalar>(a: &LineString<T>, b: &LineString<T>) -> Vec<Point<T>> {
  segment_crossings(a.iter_segments(), b.iter_segments()).collect()
}
