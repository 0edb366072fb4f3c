//! Benchmarks for fuzzy assessment

use airguard_core::{EngineConfig, InputVariable, Model, Readings, TNorm};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn build_benchmark(c: &mut Criterion) {
    c.bench_function("model_standard", |b| {
        b.iter(|| black_box(Model::standard()))
    });
}

fn assess_benchmark(c: &mut Criterion) {
    let model = Model::standard().expect("standard model");
    let scenarios = [
        ("clean_air", Readings::new(0.0, 1.5, 18.0, 50.0)),
        ("smog", Readings::new(150.0, 1.5, 18.0, 50.0)),
        ("degenerate", Readings::new(10_000.0, 1.5, 10_000.0, 50.0)),
    ];

    let mut group = c.benchmark_group("assess");
    for (name, readings) in &scenarios {
        group.bench_with_input(BenchmarkId::new("min", name), readings, |b, readings| {
            b.iter(|| black_box(model.assess(black_box(readings))))
        });
    }
    group.finish();
}

fn resolution_benchmark(c: &mut Criterion) {
    let readings = Readings::new(20.0, 4.0, 18.0, 50.0);
    let mut group = c.benchmark_group("output_resolution");

    for resolution in [101usize, 201, 1001] {
        let model = Model::with_config(EngineConfig {
            quality_resolution: resolution,
            t_norm: TNorm::Min,
            ..EngineConfig::default()
        })
        .expect("valid resolution");

        group.bench_with_input(BenchmarkId::from_parameter(resolution), &readings, |b, readings| {
            b.iter(|| black_box(model.assess(readings)))
        });
    }
    group.finish();
}

fn fuzzify_benchmark(c: &mut Criterion) {
    let model = Model::standard().expect("standard model");

    c.bench_function("fuzzify_particulate", |b| {
        b.iter(|| black_box(model.fuzzify(InputVariable::Particulate, black_box(37.5))))
    });
}

criterion_group!(
    benches,
    build_benchmark,
    assess_benchmark,
    resolution_benchmark,
    fuzzify_benchmark
);
criterion_main!(benches);
