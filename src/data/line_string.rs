use claims::debug_assert_ok;

use super::{LineSegmentView, Point};
use crate::{Error, PlanarScalar};

/// An open polyline of at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<T = f64> {
  pub(crate) points: Vec<Point<T>>,
}

impl<T: PlanarScalar> LineString<T> {
  pub fn new(points: Vec<Point<T>>) -> Result<LineString<T>, Error> {
    let line = LineString { points };
    line.validate()?;
    Ok(line)
  }

  pub fn new_unchecked(points: Vec<Point<T>>) -> LineString<T> {
    let line = LineString { points };
    debug_assert_ok!(line.validate());
    line
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 2 {
      return Err(Error::InsufficientVertices);
    }
    self.points.iter().try_for_each(Point::validate)
  }

  /// True if `pt` lies on any segment, endpoints included.
  ///
  /// # Time complexity
  /// $O(n)$
  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.iter_segments().any(|segment| segment.contains(pt))
  }
}

impl<T> LineString<T> {
  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.points.iter()
  }

  pub fn iter_segments(&self) -> impl Iterator<Item = LineSegmentView<'_, T>> + Clone {
    self
      .points
      .windows(2)
      .map(|pair| LineSegmentView::new(&pair[0], &pair[1]))
  }
}
