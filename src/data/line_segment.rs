use std::ops::Range;

use super::Point;

use crate::{Intersects, PlanarScalar};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Directed segment from `src` to `dst`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T = f64> {
  pub src: Point<T>,
  pub dst: Point<T>,
}

impl<T> LineSegment<T> {
  pub fn new(src: Point<T>, dst: Point<T>) -> LineSegment<T> {
    LineSegment { src, dst }
  }

  pub fn as_ref(&self) -> LineSegmentView<'_, T> {
    LineSegmentView {
      src: &self.src,
      dst: &self.dst,
    }
  }
}

impl<T: PlanarScalar> LineSegment<T> {
  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.as_ref().contains(pt)
  }
}

impl<T> From<Range<Point<T>>> for LineSegment<T> {
  fn from(range: Range<Point<T>>) -> LineSegment<T> {
    LineSegment::new(range.start, range.end)
  }
}

impl<T> From<Range<(T, T)>> for LineSegment<T> {
  fn from(range: Range<(T, T)>) -> LineSegment<T> {
    LineSegment::new(range.start.into(), range.end.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// LineSegmentView

#[derive(Debug, PartialEq)]
pub struct LineSegmentView<'a, T = f64> {
  pub src: &'a Point<T>,
  pub dst: &'a Point<T>,
}

impl<'a, T> Clone for LineSegmentView<'a, T> {
  fn clone(&self) -> Self {
    LineSegmentView {
      src: self.src,
      dst: self.dst,
    }
  }
}
impl<'a, T> Copy for LineSegmentView<'a, T> {}

impl<'a, T> LineSegmentView<'a, T> {
  pub fn new(src: &'a Point<T>, dst: &'a Point<T>) -> LineSegmentView<'a, T> {
    LineSegmentView { src, dst }
  }
}

impl<'a, T: PlanarScalar> LineSegmentView<'a, T> {
  /// Boundary inclusive: both endpoints lie on the segment.
  ///
  /// The point must be exactly colinear. The range check runs on whichever
  /// axis the segment spans further, so no division is needed. When
  /// `src == dst` every point is colinear and only the x interval is
  /// checked, so any point sharing the x coordinate lies on the segment.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    let (start, end) = (self.src, self.dst);
    if pt.cross(start, end) != T::zero() {
      return false;
    }
    let dx = end.array[0] - start.array[0];
    let dy = end.array[1] - start.array[1];
    let axis = if dx.abs() >= dy.abs() { 0 } else { 1 };
    between(&pt.array[axis], &start.array[axis], &end.array[axis])
  }

  /// Like [`contains`](Self::contains), but a degenerate segment only
  /// contains its own coordinate.
  pub fn contains_exact(&self, pt: &Point<T>) -> bool {
    if self.src == self.dst {
      return pt == self.src;
    }
    self.contains(pt)
  }
}

// Closed interval test, independent of the order of `a` and `b`.
fn between<T: PartialOrd>(inner: &T, a: &T, b: &T) -> bool {
  if a <= b {
    a <= inner && inner <= b
  } else {
    b <= inner && inner <= a
  }
}

impl<'a, T> From<&'a LineSegment<T>> for LineSegmentView<'a, T> {
  fn from(segment: &'a LineSegment<T>) -> LineSegmentView<'a, T> {
    segment.as_ref()
  }
}

impl<'a, T> From<&'a Range<Point<T>>> for LineSegmentView<'a, T> {
  fn from(range: &'a Range<Point<T>>) -> LineSegmentView<'a, T> {
    LineSegmentView::new(&range.start, &range.end)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

/// Intersection point of two segments, or `None`.
///
/// Parallel and colinear segments never intersect, even when they overlap.
/// The crossing must lie strictly inside both segments: touching at an
/// endpoint is not an intersection.
pub fn segment_intersection<T: PlanarScalar>(
  a: LineSegmentView<'_, T>,
  b: LineSegmentView<'_, T>,
) -> Option<Point<T>> {
  let [a0x, a0y] = a.src.array;
  let [a1x, a1y] = a.dst.array;
  let [b0x, b0y] = b.src.array;
  let [b1x, b1y] = b.dst.array;
  let denominator = (b1y - b0y) * (a1x - a0x) - (b1x - b0x) * (a1y - a0y);
  if denominator == T::zero() {
    return None;
  }
  let d_start_x = a0x - b0x;
  let d_start_y = a0y - b0y;
  let a_t = ((b1x - b0x) * d_start_y - (b1y - b0y) * d_start_x) / denominator;
  let b_t = ((a1x - a0x) * d_start_y - (a1y - a0y) * d_start_x) / denominator;
  if strictly_inside(a_t) && strictly_inside(b_t) {
    Some(Point::new([a0x + a_t * (a1x - a0x), a0y + a_t * (a1y - a0y)]))
  } else {
    None
  }
}

fn strictly_inside<T: PlanarScalar>(t: T) -> bool {
  T::zero() < t && t < T::one()
}

impl<'a, T> Intersects for LineSegmentView<'a, T>
where
  T: PlanarScalar,
{
  type Result = Point<T>;
  fn intersect(self, other: LineSegmentView<'a, T>) -> Option<Self::Result> {
    segment_intersection(self, other)
  }
}

impl<'a, T> Intersects for &'a LineSegment<T>
where
  T: PlanarScalar,
{
  type Result = Point<T>;
  fn intersect(self, other: &'a LineSegment<T>) -> Option<Self::Result> {
    self.as_ref().intersect(other.as_ref())
  }
}

impl<'a, T> Intersects for &'a Range<Point<T>>
where
  T: PlanarScalar,
{
  type Result = Point<T>;
  fn intersect(self, other: &'a Range<Point<T>>) -> Option<Self::Result> {
    LineSegmentView::from(self).intersect(LineSegmentView::from(other))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
