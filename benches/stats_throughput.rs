/// Statistics throughput benchmarks
///
/// Measures regression, t-tests and the feature helpers over growing
/// sample sizes.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use dsml::stats::{linear_regression, ttest_ind, ttest_rel};
use dsml::time_series::rolling_mean;
use dsml::viz::histogram;

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Deterministic noisy series: a trend plus a bounded wobble
fn series(n: usize, offset: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            offset + 0.5 * x + (x * 0.7).sin() * 3.0
        })
        .collect()
}

fn bench_linear_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_regression");
    group.measurement_time(Duration::from_secs(5));

    for size in SIZES.iter() {
        let x: Vec<f64> = (0..*size).map(|i| i as f64).collect();
        let y = series(*size, 10.0);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(linear_regression(black_box(&x), black_box(&y))));
        });
    }

    group.finish();
}

fn bench_ttests(c: &mut Criterion) {
    let mut group = c.benchmark_group("ttest");
    group.measurement_time(Duration::from_secs(5));

    for size in SIZES.iter() {
        let a = series(*size, 0.0);
        let b = series(*size, 1.5);
        group.throughput(Throughput::Elements(2 * *size as u64));

        group.bench_with_input(BenchmarkId::new("pooled", size), size, |bench, _| {
            bench.iter(|| black_box(ttest_ind(black_box(&a), black_box(&b), true)));
        });
        group.bench_with_input(BenchmarkId::new("welch", size), size, |bench, _| {
            bench.iter(|| black_box(ttest_ind(black_box(&a), black_box(&b), false)));
        });
        group.bench_with_input(BenchmarkId::new("paired", size), size, |bench, _| {
            bench.iter(|| black_box(ttest_rel(black_box(&a), black_box(&b))));
        });
    }

    group.finish();
}

fn bench_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("helpers");
    group.measurement_time(Duration::from_secs(5));

    let data = series(100_000, 0.0);
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_function("rolling_mean_w30", |b| {
        b.iter(|| black_box(rolling_mean(black_box(&data), 30)));
    });
    group.bench_function("histogram_50_bins", |b| {
        b.iter(|| black_box(histogram(black_box(&data), 50)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_linear_regression,
    bench_ttests,
    bench_helpers
);
criterion_main!(benches);
