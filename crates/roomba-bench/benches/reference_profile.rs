//! Criterion benchmarks for whole-simulation ticks.

use criterion::{criterion_group, criterion_main, Criterion};
use roomba_bench::{reference_profile, stress_profile};
use roomba_engine::Simulation;
use std::hint::black_box;

fn bench_reference_tick(c: &mut Criterion) {
    c.bench_function("reference_100_ticks", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(reference_profile(42)).unwrap();
            for _ in 0..100 {
                black_box(sim.tick().unwrap());
            }
        });
    });
}

fn bench_reference_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_to_completion");
    group.sample_size(10);
    group.bench_function("reference", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(reference_profile(7)).unwrap();
            black_box(sim.run().unwrap())
        });
    });
    group.finish();
}

fn bench_stress_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("stress_10_ticks", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(stress_profile(42)).unwrap();
            for _ in 0..10 {
                black_box(sim.tick().unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_reference_tick,
    bench_reference_run,
    bench_stress_tick
);
criterion_main!(benches);
