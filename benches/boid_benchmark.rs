/*
 * Flocking Benchmark
 *
 * Measures the cost of the steering rules and of a full flock update.
 * Neighbor search is a scan over the whole population, so both grow
 * quadratically with the number of boids.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flocking::{Boid, Bounds, Flock, Pillar, SimulationParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const WORLD_SIZE: f32 = 1000.0;

fn random_flock(n: usize, rng: &mut StdRng) -> Flock {
    let mut flock = Flock::new();
    flock.extend((0..n).map(|_| {
        let x = rng.gen_range(0.0..WORLD_SIZE);
        let y = rng.gen_range(0.0..WORLD_SIZE);
        Boid::with_rng(x, y, rng)
    }));
    flock
}

fn random_pillars(n: usize, rng: &mut StdRng) -> Vec<Pillar> {
    (0..n)
        .map(|_| Pillar::new(rng.gen_range(0.0..WORLD_SIZE), rng.gen_range(0.0..WORLD_SIZE)))
        .collect()
}

// Benchmark the steering force calculations for a single boid
fn bench_force_calculations(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_calculations");
    let params = SimulationParams::default();

    for num_boids in [100, 500, 1000, 2000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            let flock = random_flock(n, &mut rng);
            let pillars = random_pillars(50, &mut rng);
            let boids = flock.boids();

            b.iter(|| {
                let mut boid = boids[0].clone();
                boid.flock(black_box(boids), black_box(&pillars), &params);
                black_box(boid.acceleration)
            });
        });
    }

    group.finish();
}

// Benchmark the overall update loop
fn bench_update_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_loop");
    let params = SimulationParams::default();
    let bounds = Bounds::new(WORLD_SIZE, WORLD_SIZE);

    for num_boids in [100, 500, 1000, 2000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut rng = StdRng::seed_from_u64(2);
            let mut flock = random_flock(n, &mut rng);
            let pillars = random_pillars(50, &mut rng);

            b.iter(|| {
                flock.update(black_box(&pillars), &params, bounds);
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_force_calculations, bench_update_loop
}

criterion_main!(benches);
