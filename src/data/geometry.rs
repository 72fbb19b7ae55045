use super::{LineString, Point, Polygon};
use crate::{Error, PlanarScalar};

///////////////////////////////////////////////////////////////////////////////
// SimpleGeometry

/// One of the three atomic geometry kinds the predicates operate on.
#[derive(Debug, Clone, PartialEq)]
pub enum SimpleGeometry<T = f64> {
  Point(Point<T>),
  LineString(LineString<T>),
  Polygon(Polygon<T>),
}

impl<T> SimpleGeometry<T> {
  pub fn as_ref(&self) -> SimpleGeometryView<'_, T> {
    match self {
      SimpleGeometry::Point(p) => SimpleGeometryView::Point(p),
      SimpleGeometry::LineString(l) => SimpleGeometryView::LineString(l),
      SimpleGeometry::Polygon(p) => SimpleGeometryView::Polygon(p),
    }
  }
}

impl<T> From<Point<T>> for SimpleGeometry<T> {
  fn from(point: Point<T>) -> SimpleGeometry<T> {
    SimpleGeometry::Point(point)
  }
}

impl<T> From<LineString<T>> for SimpleGeometry<T> {
  fn from(line: LineString<T>) -> SimpleGeometry<T> {
    SimpleGeometry::LineString(line)
  }
}

impl<T> From<Polygon<T>> for SimpleGeometry<T> {
  fn from(polygon: Polygon<T>) -> SimpleGeometry<T> {
    SimpleGeometry::Polygon(polygon)
  }
}

///////////////////////////////////////////////////////////////////////////////
// SimpleGeometryView

#[derive(Debug, PartialEq)]
pub enum SimpleGeometryView<'a, T = f64> {
  Point(&'a Point<T>),
  LineString(&'a LineString<T>),
  Polygon(&'a Polygon<T>),
}

// Can't derive it because T should not be 'Clone'.
impl<'a, T> Clone for SimpleGeometryView<'a, T> {
  fn clone(&self) -> Self {
    *self
  }
}
impl<'a, T> Copy for SimpleGeometryView<'a, T> {}

impl<'a, T: PlanarScalar> SimpleGeometryView<'a, T> {
  pub fn validate(&self) -> Result<(), Error> {
    match self {
      SimpleGeometryView::Point(p) => p.validate(),
      SimpleGeometryView::LineString(l) => l.validate(),
      SimpleGeometryView::Polygon(p) => p.validate(),
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Geometry

/// Possibly compound geometry. Collections nest arbitrarily.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry<T = f64> {
  Point(Point<T>),
  LineString(LineString<T>),
  Polygon(Polygon<T>),
  MultiPoint(Vec<Point<T>>),
  MultiLineString(Vec<LineString<T>>),
  MultiPolygon(Vec<Polygon<T>>),
  GeometryCollection(Vec<Geometry<T>>),
}

impl<T> From<SimpleGeometry<T>> for Geometry<T> {
  fn from(simple: SimpleGeometry<T>) -> Geometry<T> {
    match simple {
      SimpleGeometry::Point(p) => Geometry::Point(p),
      SimpleGeometry::LineString(l) => Geometry::LineString(l),
      SimpleGeometry::Polygon(p) => Geometry::Polygon(p),
    }
  }
}

impl<T> From<Point<T>> for Geometry<T> {
  fn from(point: Point<T>) -> Geometry<T> {
    Geometry::Point(point)
  }
}

impl<T> From<LineString<T>> for Geometry<T> {
  fn from(line: LineString<T>) -> Geometry<T> {
    Geometry::LineString(line)
  }
}

impl<T> From<Polygon<T>> for Geometry<T> {
  fn from(polygon: Polygon<T>) -> Geometry<T> {
    Geometry::Polygon(polygon)
  }
}

/// A geometry slot that may be empty. Properties are not modelled.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<T = f64> {
  pub geometry: Option<Geometry<T>>,
}

impl<T> Feature<T> {
  pub fn new(geometry: impl Into<Geometry<T>>) -> Feature<T> {
    Feature {
      geometry: Some(geometry.into()),
    }
  }

  pub fn empty() -> Feature<T> {
    Feature { geometry: None }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Flatten

/// Decomposition of compound input into simple geometries.
///
/// The order is depth-first and follows the order of the input, so repeated
/// calls yield the same sequence.
pub trait Flatten<T> {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>);

  fn flatten(&self) -> Vec<SimpleGeometryView<'_, T>> {
    let mut out = Vec::new();
    self.flatten_into(&mut out);
    out
  }
}

impl<T> Flatten<T> for Point<T> {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>) {
    out.push(SimpleGeometryView::Point(self))
  }
}

impl<T> Flatten<T> for LineString<T> {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>) {
    out.push(SimpleGeometryView::LineString(self))
  }
}

impl<T> Flatten<T> for Polygon<T> {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>) {
    out.push(SimpleGeometryView::Polygon(self))
  }
}

impl<T> Flatten<T> for SimpleGeometry<T> {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>) {
    out.push(self.as_ref())
  }
}

impl<'b, T> Flatten<T> for SimpleGeometryView<'b, T> {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>) {
    out.push(*self)
  }
}

impl<T> Flatten<T> for Geometry<T> {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>) {
    match self {
      Geometry::Point(p) => p.flatten_into(out),
      Geometry::LineString(l) => l.flatten_into(out),
      Geometry::Polygon(p) => p.flatten_into(out),
      Geometry::MultiPoint(ps) => ps.flatten_into(out),
      Geometry::MultiLineString(ls) => ls.flatten_into(out),
      Geometry::MultiPolygon(ps) => ps.flatten_into(out),
      Geometry::GeometryCollection(gs) => gs.flatten_into(out),
    }
  }
}

impl<T> Flatten<T> for Feature<T> {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>) {
    if let Some(geometry) = &self.geometry {
      geometry.flatten_into(out)
    }
  }
}

impl<T, F: Flatten<T>> Flatten<T> for [F] {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>) {
    for item in self {
      item.flatten_into(out)
    }
  }
}

impl<T, F: Flatten<T>> Flatten<T> for Vec<F> {
  fn flatten_into<'a>(&'a self, out: &mut Vec<SimpleGeometryView<'a, T>>) {
    self.as_slice().flatten_into(out)
  }
}
