//! Benchmarks for rfmkit-math operations.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ndarray::Array1;
use rand::Rng;
use rfmkit_math::{
    Standardizer, assign_grades, min_max_cut_points, quantile_cut_points,
};

fn random_array(n: usize) -> Array1<f64> {
    let mut rng = rand::thread_rng();
    Array1::from_iter((0..n).map(|_| rng.r#gen::<f64>() * 1000.0))
}

fn bench_standardize(c: &mut Criterion) {
    let mut group = c.benchmark_group("standardize");

    for size in [100, 1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let data = random_array(size);
            let scaler = Standardizer::new();
            b.iter(|| scaler.apply(black_box(&data)));
        });
    }

    group.finish();
}

fn bench_quantile_cut_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile_cut_points");

    for size in [100, 1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let data = random_array(size);
            b.iter(|| quantile_cut_points(black_box(&data), black_box(10)).unwrap());
        });
    }

    group.finish();
}

fn bench_assign_grades(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_grades");

    for num_class in [3, 5, 10, 20] {
        let data = random_array(100000);
        let cuts = min_max_cut_points(&data, num_class).unwrap();
        group.throughput(Throughput::Elements(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("classes", num_class), &cuts, |b, cuts| {
            b.iter(|| assign_grades(black_box(&data), cuts));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_standardize, bench_quantile_cut_points, bench_assign_grades);
criterion_main!(benches);
