use claims::debug_assert_ok;
use rand::Rng;

use crate::data::{LineSegmentView, Point, PointLocation};
use crate::{Error, PlanarScalar};

/// Polygon made of closed rings. Ring 0 is the outer boundary, the rest are
/// holes. Holes are carried along but ignored by every predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
  pub(crate) rings: Vec<Vec<Point<T>>>,
}

impl<T: PlanarScalar> Polygon<T> {
  pub fn new(rings: Vec<Vec<Point<T>>>) -> Result<Polygon<T>, Error> {
    let p = Polygon { rings };
    p.validate()?;
    Ok(p)
  }

  pub fn new_unchecked(rings: Vec<Vec<Point<T>>>) -> Polygon<T> {
    let p = Polygon { rings };
    debug_assert_ok!(p.validate());
    p
  }

  /// Polygon without holes. The ring must already be closed.
  pub fn from_ring(ring: Vec<Point<T>>) -> Result<Polygon<T>, Error> {
    Polygon::new(vec![ring])
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.rings.is_empty() {
      return Err(Error::MissingOuterRing);
    }
    self.rings.iter().try_for_each(|ring| validate_ring(ring))
  }

  /// Axis-aligned bounding box of the outer ring as `(min, max)`.
  pub fn bounding_box(&self) -> (Point<T>, Point<T>) {
    let inf = T::infinity();
    let init = (Point::new([inf, inf]), Point::new([-inf, -inf]));
    self.outer().iter().fold(init, |(min, max), pt| {
      (
        Point::new([min.array[0].min(pt.array[0]), min.array[1].min(pt.array[1])]),
        Point::new([max.array[0].max(pt.array[0]), max.array[1].max(pt.array[1])]),
      )
    })
  }

  /// Locate a point relative to the outer ring by ray casting.
  ///
  /// A horizontal ray is cast towards +x and the ring edges it crosses are
  /// counted. Points exactly on an edge or vertex are `OnBoundary`.
  ///
  /// # Time complexity
  /// $O(n)$
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    self.locate_in_box(&self.bounding_box(), pt)
  }

  /// Boundary inclusive point-in-polygon test.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.locate(pt) != PointLocation::Outside
  }

  /// [`locate`](Self::locate) with a bounding box computed up front. Callers
  /// testing many points against one polygon pass the box once instead of
  /// paying for a second pass over the ring per point. `bbox` must be
  /// `self.bounding_box()`.
  pub(crate) fn locate_in_box(&self, bbox: &(Point<T>, Point<T>), pt: &Point<T>) -> PointLocation {
    let (min, max) = bbox;
    let [x, y] = pt.array;
    if x < min.array[0] || x > max.array[0] || y < min.array[1] || y > max.array[1] {
      return PointLocation::Outside;
    }
    let mut inside = false;
    for edge in self.iter_boundary_edges() {
      // A repeated ring vertex is a point, not a vertical band.
      if edge.contains_exact(pt) {
        return PointLocation::OnBoundary;
      }
      let [xi, yi] = edge.src.array;
      let [xj, yj] = edge.dst.array;
      if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
        inside = !inside;
      }
    }
    if inside {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    }
  }

  pub(crate) fn contains_in_box(&self, bbox: &(Point<T>, Point<T>), pt: &Point<T>) -> bool {
    self.locate_in_box(bbox, pt) != PointLocation::Outside
  }
}

fn validate_ring<T: PlanarScalar>(ring: &[Point<T>]) -> Result<(), Error> {
  if ring.len() < 4 {
    return Err(Error::InsufficientVertices);
  }
  ring.iter().try_for_each(Point::validate)?;
  if ring.first() != ring.last() {
    return Err(Error::UnclosedRing);
  }
  Ok(())
}

impl<T> Polygon<T> {
  /// Points of the outer ring, closing point included.
  pub fn outer(&self) -> &[Point<T>] {
    match self.rings.first() {
      Some(ring) => ring,
      None => &[],
    }
  }

  pub fn holes(&self) -> &[Vec<Point<T>>] {
    self.rings.get(1..).unwrap_or(&[])
  }

  pub fn rings(&self) -> &[Vec<Point<T>>] {
    &self.rings
  }

  pub fn iter_boundary_edges(&self) -> impl Iterator<Item = LineSegmentView<'_, T>> + Clone {
    self
      .outer()
      .windows(2)
      .map(|pair| LineSegmentView::new(&pair[0], &pair[1]))
  }

  pub fn cast<U, F>(self, f: F) -> Polygon<U>
  where
    T: Clone,
    F: Fn(T) -> U + Clone,
  {
    let rings = self
      .rings
      .into_iter()
      .map(|ring| ring.iter().map(|p| p.cast(f.clone())).collect())
      .collect();
    Polygon { rings }
  }
}

impl Polygon<f64> {
  /// Random star-shaped polygon with `n` vertices (at least 3) around the
  /// origin. Radii are drawn from `[0.5, 1.0)`, so the ring never
  /// self-intersects.
  pub fn random_star<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Polygon<f64> {
    let n = n.max(3);
    let mut ring: Vec<Point<f64>> = (0..n)
      .map(|i| {
        let angle = std::f64::consts::TAU * i as f64 / n as f64;
        let radius = rng.gen_range(0.5..1.0);
        Point::new([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    ring.push(ring[0]);
    Polygon { rings: vec![ring] }
  }
}
