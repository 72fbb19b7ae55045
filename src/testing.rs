// This module contains strategies for:
//  * points on a small integer grid
//  * line strings
//  * polygons (rectangles and triangles)
//  * simple geometries
// Grid coordinates keep every cross product exact in f64, so properties such
// as symmetry can be checked with `==`.
use crate::data::{LineString, Point, Polygon, SimpleGeometry};

use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;

const GRID: std::ops::RangeInclusive<i8> = -10..=10;

pub fn any_grid() -> impl Strategy<Value = Point<f64>> + Clone {
  (GRID, GRID).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn any_line_string() -> impl Strategy<Value = LineString<f64>> + Clone {
  vec(any_grid(), 2..6).prop_map(LineString::new_unchecked)
}

/// Axis-aligned rectangle with positive width and height.
pub fn any_rectangle() -> impl Strategy<Value = Polygon<f64>> + Clone {
  (any_grid(), 1..=5i8, 1..=5i8).prop_map(|(origin, w, h)| {
    let [x, y] = origin.array;
    let (w, h) = (f64::from(w), f64::from(h));
    closed(vec![
      Point::new([x, y]),
      Point::new([x + w, y]),
      Point::new([x + w, y + h]),
      Point::new([x, y + h]),
    ])
  })
}

/// Triangle with arbitrary winding. May be degenerate.
pub fn any_triangle() -> impl Strategy<Value = Polygon<f64>> + Clone {
  [any_grid(), any_grid(), any_grid()].prop_map(|pts| closed(pts.to_vec()))
}

pub fn any_polygon() -> impl Strategy<Value = Polygon<f64>> + Clone {
  prop_oneof![any_rectangle(), any_triangle()]
}

pub fn any_simple_geometry() -> impl Strategy<Value = SimpleGeometry<f64>> + Clone {
  prop_oneof![
    any_grid().prop_map(SimpleGeometry::Point),
    any_line_string().prop_map(SimpleGeometry::LineString),
    any_polygon().prop_map(SimpleGeometry::Polygon),
  ]
}

fn closed(mut ring: Vec<Point<f64>>) -> Polygon<f64> {
  ring.push(ring[0]);
  Polygon::new_unchecked(vec![ring])
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary simple geometry

impl Arbitrary for SimpleGeometry<f64> {
  type Strategy = BoxedStrategy<SimpleGeometry<f64>>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    any_simple_geometry().boxed()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  proptest! {
    #[test]
    fn generated_geometry_is_valid(geometry: SimpleGeometry<f64>) {
      prop_assert!(geometry.as_ref().validate().is_ok())
    }

    #[test]
    fn rectangles_have_area(rect in any_rectangle()) {
      let (min, max) = rect.bounding_box();
      prop_assert!(min[0] < max[0] && min[1] < max[1])
    }
  }
}
