//! Criterion benchmarks for stepping each variant at 10K cells.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tessera_bench::{life_profile, rule1d_profile, terrain_profile};
use tessera_engine::{Variant, World};
use tessera_replay::world_hashes;

fn bench_world(c: &mut Criterion, name: &str, mut world: World) {
    // Warm up: one tick so the staging buffers are touched.
    world.step().unwrap();

    c.bench_function(name, |b| {
        b.iter(|| {
            if world.is_complete() {
                world.reset();
            }
            let report = world.step().unwrap();
            black_box(&report);
        });
    });
}

fn bench_life_10k(c: &mut Criterion) {
    for (name, variant) in [
        ("life_standard_10k", Variant::LifeStandard),
        (
            "life_virus_10k",
            Variant::LifeVirus {
                infection_probability: 0.1,
            },
        ),
        ("life_battle_10k", Variant::LifeBattle),
    ] {
        let (config, seed_data) = life_profile(variant, 42);
        bench_world(c, name, World::initialize(&config, seed_data).unwrap());
    }
}

fn bench_terrain_10k(c: &mut Criterion) {
    let (config, seed_data) = terrain_profile(42);
    bench_world(c, "terrain_10k", World::initialize(&config, seed_data).unwrap());
}

fn bench_rule1d_10k(c: &mut Criterion) {
    let (config, seed_data) = rule1d_profile(414_420, 42);
    bench_world(c, "rule1d_10k", World::initialize(&config, seed_data).unwrap());
}

fn bench_full_run_and_hash(c: &mut Criterion) {
    let (config, seed_data) = life_profile(Variant::LifeStandard, 7);
    c.bench_function("life_64_ticks_hashed", |b| {
        b.iter(|| {
            let mut world = World::initialize(&config, seed_data.clone()).unwrap();
            world.run().unwrap();
            black_box(world_hashes(&world));
        });
    });
}

criterion_group!(
    benches,
    bench_life_10k,
    bench_terrain_10k,
    bench_rule1d_10k,
    bench_full_run_and_hash
);
criterion_main!(benches);
