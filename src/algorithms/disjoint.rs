//! Disjoint predicate for simple and compound geometries.
//!
//! Two geometries are disjoint when they share no point. Containment tests
//! are boundary inclusive while segment crossings are boundary exclusive, so a
//! touch along a shared boundary is caught by containment and never counted
//! twice.
//!
//! Known gap: colinear overlapping segments are reported as not crossing.
//! Two line strings that only overlap along a colinear stretch, or meet in a
//! T-junction where one ends inside the other, are therefore disjoint.
use tracing::{debug, trace};

use super::intersection::segments_cross;
use crate::data::{Flatten, LineString, Polygon, SimpleGeometryView as View};
use crate::{Error, PlanarScalar};

/// Validated entry point.
///
/// Flattens both inputs, rejects malformed geometry, and then tests every pair
/// of simple geometries. Returns `Ok(false)` as soon as one pair is found to
/// share a point. Inputs without any simple geometry are disjoint from
/// everything.
///
/// ```rust
/// use planar_disjoint::algorithms::disjoint;
/// use planar_disjoint::data::{Feature, Point, Polygon};
///
/// let square = Polygon::from_ring(vec![
///   Point::new([0.0, 0.0]),
///   Point::new([2.0, 0.0]),
///   Point::new([2.0, 2.0]),
///   Point::new([0.0, 2.0]),
///   Point::new([0.0, 0.0]),
/// ])
/// .unwrap();
/// assert_eq!(disjoint(&square, &Point::new([1.0, 0.0])), Ok(false));
/// assert_eq!(disjoint(&square, &Point::new([3.0, 0.0])), Ok(true));
/// assert_eq!(disjoint(&Feature::empty(), &square), Ok(true));
/// ```
pub fn disjoint<T, A, B>(a: &A, b: &B) -> Result<bool, Error>
where
  T: PlanarScalar,
  A: Flatten<T> + ?Sized,
  B: Flatten<T> + ?Sized,
{
  let lhs = a.flatten();
  let rhs = b.flatten();
  if let Err(err) = lhs.iter().chain(rhs.iter()).try_for_each(View::validate) {
    debug!(error = %err, "rejecting invalid geometry");
    return Err(err);
  }
  let result = all_pairs_disjoint(&lhs, &rhs);
  trace!(lhs = lhs.len(), rhs = rhs.len(), disjoint = result, "disjoint");
  Ok(result)
}

/// Like [`disjoint`] but without validation. The result is meaningless for
/// malformed geometry.
pub fn disjoint_unchecked<T, A, B>(a: &A, b: &B) -> bool
where
  T: PlanarScalar,
  A: Flatten<T> + ?Sized,
  B: Flatten<T> + ?Sized,
{
  all_pairs_disjoint(&a.flatten(), &b.flatten())
}

/// Negation of [`disjoint`]: true if the inputs share at least one point.
pub fn intersects<T, A, B>(a: &A, b: &B) -> Result<bool, Error>
where
  T: PlanarScalar,
  A: Flatten<T> + ?Sized,
  B: Flatten<T> + ?Sized,
{
  disjoint(a, b).map(|d| !d)
}

fn all_pairs_disjoint<T: PlanarScalar>(lhs: &[View<'_, T>], rhs: &[View<'_, T>]) -> bool {
  lhs
    .iter()
    .all(|&g1| rhs.iter().all(|&g2| simple_disjoint(g1, g2)))
}

/// Disjoint test for a pair of simple geometries.
///
/// | geom1      | geom2      | disjoint if                                     |
/// |------------|------------|-------------------------------------------------|
/// | Point      | Point      | coordinates differ                              |
/// | Point      | LineString | point is on no segment                          |
/// | Point      | Polygon    | point is not in the outer ring                  |
/// | LineString | LineString | no two segments cross                           |
/// | LineString | Polygon    | no line vertex inside, no segment crosses ring  |
/// | Polygon    | Polygon    | no vertex inside the other, no edges cross      |
///
/// # Time complexity
/// $O(n \cdot m)$
pub fn simple_disjoint<T: PlanarScalar>(a: View<'_, T>, b: View<'_, T>) -> bool {
  match (a, b) {
    (View::Point(p), View::Point(q)) => p != q,
    (View::Point(p), View::LineString(l)) | (View::LineString(l), View::Point(p)) => !l.contains(p),
    (View::Point(p), View::Polygon(poly)) | (View::Polygon(poly), View::Point(p)) => {
      !poly.contains(p)
    }
    (View::LineString(l1), View::LineString(l2)) => {
      !segments_cross(l1.iter_segments(), l2.iter_segments())
    }
    (View::LineString(l), View::Polygon(poly)) | (View::Polygon(poly), View::LineString(l)) => {
      !line_meets_polygon(l, poly)
    }
    (View::Polygon(p1), View::Polygon(p2)) => !polygons_meet(p1, p2),
  }
}

fn line_meets_polygon<T: PlanarScalar>(line: &LineString<T>, polygon: &Polygon<T>) -> bool {
  let bbox = polygon.bounding_box();
  line.iter().any(|pt| polygon.contains_in_box(&bbox, pt))
    || segments_cross(line.iter_segments(), polygon.iter_boundary_edges())
}

// Outer rings only.
fn polygons_meet<T: PlanarScalar>(a: &Polygon<T>, b: &Polygon<T>) -> bool {
  let (a_box, b_box) = (a.bounding_box(), b.bounding_box());
  a.outer().iter().any(|pt| b.contains_in_box(&b_box, pt))
    || b.outer().iter().any(|pt| a.contains_in_box(&a_box, pt))
    || segments_cross(a.iter_boundary_edges(), b.iter_boundary_edges())
}
