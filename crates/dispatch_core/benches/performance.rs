//! Performance benchmarks for dispatch_core using Criterion.rs.
//!
//! Both selection operations are contractually linear in fleet size; compare
//! the per-iteration times at N and 10N drivers to check the scaling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dispatch_core::fleet::NewDriver;
use dispatch_core::matching::{assign_nearest, collect_candidates, find_best};
use dispatch_core::registry::DriverRegistry;
use dispatch_core::spatial::Point;

fn scattered_fleet(size: usize, seed: u64) -> DriverRegistry {
    let mut rng = StdRng::seed_from_u64(seed);
    DriverRegistry::new((0..size).map(|i| {
        NewDriver::new(
            format!("driver-{i:06}"),
            Point::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)),
            rng.gen_range(1.0..=5.0),
        )
    }))
    .expect("fleet should validate")
}

fn bench_selection_scaling(c: &mut Criterion) {
    let origin = Point::new(0.0, 0.0);
    let mut group = c.benchmark_group("selection_scaling");
    for size in [1_000usize, 10_000] {
        let registry = scattered_fleet(size, 42);
        group.bench_with_input(
            BenchmarkId::new("assign_nearest", size),
            &registry,
            |b, registry| {
                b.iter(|| black_box(assign_nearest(registry, origin)).expect("match"));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("find_best", size),
            &registry,
            |b, registry| {
                b.iter(|| black_box(find_best(registry, origin)).expect("match"));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("collect_candidates", size),
            &registry,
            |b, registry| {
                b.iter(|| black_box(collect_candidates(registry, origin)).expect("candidates"));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_selection_scaling);
criterion_main!(benches);
