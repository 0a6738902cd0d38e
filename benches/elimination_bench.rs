//! Benchmarks for Gauss-Jordan elimination.
//!
//! Includes:
//! - Exact rational reduction of dense systems
//! - Floating-point reduction of the same systems
//! - The built-in sample system, reduced and rendered

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gauss::prelude::*;

/// Diagonally dominant `n × (n + 1)` system with small integer entries.
fn dense_system<S: Scalar>(n: usize) -> Matrix<S> {
    let n_i64 = i64::try_from(n).unwrap();
    let rows = (0..n)
        .map(|i| {
            (0..=n)
                .map(|j| {
                    let value = if i == j {
                        n_i64 + 1
                    } else {
                        i64::try_from((i * 7 + j * 3) % 5).unwrap() - 2
                    };
                    S::from_i64(value)
                })
                .collect()
        })
        .collect();
    Matrix::from_rows(rows).unwrap()
}

/// Benchmark exact reduction.
fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_exact");

    for size in [4, 8, 16] {
        let system = dense_system::<Rational>(size);
        group.bench_with_input(BenchmarkId::new("dense", size), &size, |b, _| {
            b.iter(|| black_box(EliminationEngine::reduce(&system)))
        });
    }

    group.finish();
}

/// Benchmark floating-point reduction.
fn bench_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_float");

    for size in [4, 8, 16, 32] {
        let system = dense_system::<Real>(size);
        group.bench_with_input(BenchmarkId::new("dense", size), &size, |b, _| {
            b.iter(|| black_box(EliminationEngine::reduce(&system)))
        });
    }

    group.finish();
}

/// Benchmark the full solve-and-render path on the sample system.
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_system");

    let exact = sample_system::<Rational>().unwrap();
    group.bench_function("exact_solve_render", |b| {
        b.iter(|| black_box(solve(&exact).unwrap().render()))
    });

    let float = sample_system::<Real>().unwrap();
    group.bench_function("float_solve_render", |b| {
        b.iter(|| black_box(solve(&float).unwrap().render()))
    });

    group.finish();
}

criterion_group!(elimination_benches, bench_exact, bench_float, bench_sample);

criterion_main!(elimination_benches);
