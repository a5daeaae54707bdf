//! Criterion micro-benchmarks for the coverage pipeline: partition
//! construction, gradient reports, and the full orchestrated tick.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swath_bench::{reference_profile, stress_profile};
use swath_engine::CoverageWorld;
use swath_geometry::Partition;
use swath_gradient::CvtReport;
use swath_test_utils::{jittered_grid, square};

/// Benchmark: tessellate 8 well-separated generators.
fn bench_partition_8(c: &mut Criterion) {
    let region = square(100.0);
    let generators = jittered_grid(11, 4, 2, 100.0);

    c.bench_function("partition_8", |b| {
        b.iter(|| {
            let p = Partition::compute(black_box(&generators), &region).unwrap();
            black_box(&p);
        });
    });
}

/// Benchmark: tessellate 64 generators.
fn bench_partition_64(c: &mut Criterion) {
    let region = square(100.0);
    let generators = jittered_grid(11, 8, 8, 100.0);

    c.bench_function("partition_64", |b| {
        b.iter(|| {
            let p = Partition::compute(black_box(&generators), &region).unwrap();
            black_box(&p);
        });
    });
}

/// Benchmark: gradient reports for every cell of a 16-generator
/// partition.
fn bench_reports_16(c: &mut Criterion) {
    let region = square(100.0);
    let generators = jittered_grid(11, 4, 4, 100.0);
    let partition = Partition::compute(&generators, &region).unwrap();

    c.bench_function("reports_16", |b| {
        b.iter(|| {
            for i in 0..generators.len() {
                let report = CvtReport::compute(black_box(&partition), i).unwrap();
                black_box(&report);
            }
        });
    });
}

/// Benchmark: one full tick of the 8-agent reference world.
fn bench_world_step_reference(c: &mut Criterion) {
    c.bench_function("world_step_reference", |b| {
        let mut world = CoverageWorld::new(reference_profile()).unwrap();
        b.iter(|| {
            let record = world.step().unwrap();
            black_box(&record);
        });
    });
}

/// Benchmark: one full tick of the 64-agent stress world.
fn bench_world_step_stress(c: &mut Criterion) {
    c.bench_function("world_step_stress", |b| {
        let mut world = CoverageWorld::new(stress_profile()).unwrap();
        b.iter(|| {
            let record = world.step().unwrap();
            black_box(&record);
        });
    });
}

criterion_group!(
    benches,
    bench_partition_8,
    bench_partition_64,
    bench_reports_16,
    bench_world_step_reference,
    bench_world_step_stress
);
criterion_main!(benches);
