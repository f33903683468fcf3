use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cryptoplay_curves::{Curve, Point};
use std::hint::black_box;

fn bench_scalar_mul(c: &mut Criterion) {
    // y² = x³ + 2x + 3 (mod 97)
    let curve = Curve::new(2, 3, 97).unwrap();
    let point = Point::new(3, 6);

    let mut group = c.benchmark_group("scalar_mul");
    for k in [7i64, 31, 97] {
        group.bench_with_input(BenchmarkId::new("naive", k), &k, |b, &k| {
            b.iter(|| curve.scalar_mul_naive(black_box(k), &point))
        });
        group.bench_with_input(BenchmarkId::new("double_and_add", k), &k, |b, &k| {
            b.iter(|| curve.scalar_mul(black_box(k), &point))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scalar_mul);
criterion_main!(benches);
