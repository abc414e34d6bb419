// SPDX-License-Identifier: PMPL-1.0-or-later
//! Performance benchmarks for the cost-model engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use greensim_models::{sort, ConversionFactors, Scenario, WorkloadParams};

fn factors() -> ConversionFactors {
    ConversionFactors::new(1.2e-10, 6e-11, 275.0)
}

/// Benchmark a single sort-model evaluation
fn bench_single_model(c: &mut Criterion) {
    let f = factors();
    c.bench_function("index_sort_default", |b| {
        b.iter(|| {
            let result = sort::index_sort(
                black_box(1000.0),
                black_box(100.0),
                black_box(5.0),
                &f,
            );
            black_box(result);
        });
    });
}

/// Benchmark running every variant of each scenario
fn bench_run_all(c: &mut Criterion) {
    let f = factors();
    let mut group = c.benchmark_group("run_all");

    for scenario in Scenario::ALL {
        let params = WorkloadParams::defaults(scenario);
        group.bench_with_input(
            BenchmarkId::new("scenario", scenario.id()),
            &params,
            |b, params| {
                b.iter(|| {
                    let results = params.run_all(&f);
                    black_box(results);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a scalability sweep-like workload at growing sizes
fn bench_sweep_sizes(c: &mut Criterion) {
    let f = factors();
    let mut group = c.benchmark_group("sweep");

    for n in [1_000u64, 100_000, 10_000_000] {
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::new("sort_all_variants", n), &n, |b, &n| {
            let params = WorkloadParams::Sort {
                records: n as f64,
                avg_record_size: 100.0,
                key_index_pair_size: 5.0,
            };
            b.iter(|| {
                let results = params.run_all(&f);
                black_box(results);
            });
        });
    }

    group.finish();
}

/// Benchmark serializing a result set
fn bench_serialization(c: &mut Criterion) {
    let f = factors();
    let results = WorkloadParams::defaults(Scenario::Sort).run_all(&f);

    c.bench_function("serialize_results", |b| {
        b.iter(|| {
            let json = serde_json::to_string(&results).unwrap();
            black_box(json);
        });
    });
}

criterion_group!(
    benches,
    bench_single_model,
    bench_run_all,
    bench_sweep_sizes,
    bench_serialization,
);
criterion_main!(benches);
