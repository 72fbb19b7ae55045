use criterion::{criterion_group, criterion_main, Criterion};
use planar_disjoint::algorithms::{disjoint, simple_disjoint};
use planar_disjoint::data::{Point, Polygon, SimpleGeometryView};

use rand::SeedableRng;

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
  let small = Polygon::random_star(20, &mut rng);
  let large = Polygon::random_star(1000, &mut rng);
  let far = large.clone().cast(|c| c + 3.0);
  let target = Point::new([0.1, 0.1]);

  c.bench_function("Polygon::contains(1000)", |b| {
    b.iter(|| large.contains(&target))
  });
  c.bench_function("simple_disjoint(20, 20)", |b| {
    b.iter(|| {
      simple_disjoint(
        SimpleGeometryView::Polygon(&small),
        SimpleGeometryView::Polygon(&small),
      )
    })
  });
  // Worst case: no vertex is contained and every edge pair is tested.
  c.bench_function("disjoint(1000, 1000) apart", |b| {
    b.iter(|| disjoint(&large, &far))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
