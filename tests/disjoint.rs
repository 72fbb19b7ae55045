mod disjoint {
  use planar_disjoint::algorithms::*;
  use planar_disjoint::data::*;
  use planar_disjoint::*;

  use rand::SeedableRng;

  fn pt(x: f64, y: f64) -> Point {
    Point::new([x, y])
  }

  fn line(pts: &[(f64, f64)]) -> Result<LineString, Error> {
    LineString::new(pts.iter().copied().map(Point::from).collect())
  }

  fn square(x: f64, y: f64, size: f64) -> Result<Polygon, Error> {
    Polygon::from_ring(vec![
      pt(x, y),
      pt(x + size, y),
      pt(x + size, y + size),
      pt(x, y + size),
      pt(x, y),
    ])
  }

  #[test]
  fn point_equality() -> Result<(), Error> {
    assert!(!disjoint(&pt(3.5, -1.0), &pt(3.5, -1.0))?);
    assert!(disjoint(&pt(3.5, -1.0), &pt(3.5, -1.5))?);
    Ok(())
  }

  #[test]
  fn endpoint_tie_break() -> Result<(), Error> {
    let a = LineSegment::from((0.0, 0.0)..(1.0, 1.0));
    let b = LineSegment::from((1.0, 1.0)..(2.0, 0.0));
    assert_eq!(a.intersect(&b), None);

    let joined = line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])?;
    assert!(joined.contains(&pt(1.0, 1.0)));
    assert!(!disjoint(&joined, &pt(1.0, 1.0))?);
    Ok(())
  }

  #[test]
  fn point_on_line_boundary() {
    let segment = LineSegment::from((0.0, 0.0)..(2.0, 0.0));
    assert!(segment.contains(&pt(1.0, 0.0)));
    assert!(!segment.contains(&pt(3.0, 0.0)));
  }

  #[test]
  fn degenerate_segment() -> Result<(), Error> {
    let segment = LineSegment::from((0.0, 0.0)..(0.0, 0.0));
    assert!(segment.contains(&pt(0.0, 5.0)));
    assert!(!segment.contains(&pt(1.0, 0.0)));

    let repeated = line(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)])?;
    assert!(!disjoint(&repeated, &pt(0.0, 5.0))?);
    Ok(())
  }

  #[test]
  fn point_in_polygon_boundary() -> Result<(), Error> {
    let sq = square(0.0, 0.0, 2.0)?;
    assert!(sq.contains(&pt(1.0, 0.0)));
    assert!(!disjoint(&pt(1.0, 0.0), &sq)?);
    Ok(())
  }

  #[test]
  fn disjoint_polygons() -> Result<(), Error> {
    assert!(disjoint(&square(0.0, 0.0, 1.0)?, &square(5.0, 5.0, 1.0)?)?);
    Ok(())
  }

  #[test]
  fn touching_polygons() -> Result<(), Error> {
    assert!(!disjoint(&square(0.0, 0.0, 1.0)?, &square(1.0, 0.0, 1.0)?)?);
    assert!(intersects(&square(0.0, 0.0, 1.0)?, &square(0.0, 1.0, 1.0)?)?);
    Ok(())
  }

  #[test]
  fn vacuous_truth() -> Result<(), Error> {
    let empty = Feature::empty();
    let anything = Geometry::GeometryCollection(vec![
      Geometry::Point(pt(0.0, 0.0)),
      Geometry::Polygon(square(-10.0, -10.0, 20.0)?),
    ]);
    assert!(disjoint(&empty, &anything)?);
    assert!(disjoint(&anything, &empty)?);
    assert!(disjoint(&Geometry::GeometryCollection(vec![]), &anything)?);
    Ok(())
  }

  #[test]
  fn parallel_segments() {
    let a = LineSegment::from((0.0, 0.0)..(4.0, 2.0));
    let b = LineSegment::from((0.0, 1.0)..(4.0, 3.0));
    assert_eq!(a.intersect(&b), None);
    assert_eq!(b.intersect(&a), None);
  }

  #[test]
  fn line_and_point() -> Result<(), Error> {
    let l = line(&[(1.0, 1.0), (1.0, 2.0), (1.0, 3.0), (1.0, 4.0)])?;
    assert!(disjoint(&l, &pt(2.0, 2.0))?);
    Ok(())
  }

  #[test]
  fn multi_part_short_circuits_on_any_pair() -> Result<(), Error> {
    let lhs = Geometry::MultiPoint(vec![pt(50.0, 50.0), pt(0.5, 0.5)]);
    let rhs = Geometry::MultiPolygon(vec![square(10.0, 10.0, 1.0)?, square(0.0, 0.0, 1.0)?]);
    assert!(!disjoint(&lhs, &rhs)?);
    let far = Geometry::MultiPoint(vec![pt(50.0, 50.0), pt(-5.0, 0.5)]);
    assert!(disjoint(&far, &rhs)?);
    Ok(())
  }

  #[test]
  fn feature_collections() -> Result<(), Error> {
    let roads = vec![
      Feature::new(line(&[(0.0, 5.0), (10.0, 5.0)])?),
      Feature::new(line(&[(5.0, 0.0), (5.0, 3.0)])?),
    ];
    let parcels = vec![Feature::new(square(6.0, 6.0, 2.0)?), Feature::empty()];
    assert!(disjoint(roads.as_slice(), parcels.as_slice())?);
    let lake = Feature::new(square(4.0, 4.0, 2.0)?);
    assert!(!disjoint(&roads, &lake)?);
    Ok(())
  }

  #[test]
  fn invalid_input_is_rejected() -> Result<(), Error> {
    let unclosed = Polygon::from_ring(vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)]);
    assert_eq!(unclosed, Err(Error::UnclosedRing));
    let nan = Feature::new(pt(f64::NAN, f64::NAN));
    assert_eq!(disjoint(&nan, &square(0.0, 0.0, 1.0)?), Err(Error::NonFiniteCoordinate));
    assert_eq!(line(&[(0.0, 0.0)]), Err(Error::InsufficientVertices));
    Ok(())
  }

  #[test]
  fn f32_coordinates() -> Result<(), Error> {
    let p = Point::new([0.5_f32, 0.5]);
    let sq = square(0.0, 0.0, 1.0)?.cast(|c| c as f32);
    assert!(!disjoint(&p, &sq)?);
    Ok(())
  }

  #[test]
  fn random_stars() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    let a = Polygon::random_star(32, &mut rng);
    let b = Polygon::random_star(32, &mut rng);
    assert!(!disjoint_unchecked(&a, &b));
    assert!(disjoint_unchecked(&a, &pt(2.0, 2.0)));
  }
}
