//! Determinism verification integration tests.
//!
//! Each test: build a config, run it through `World`, record a
//! `HashTrace`, then re-run from the same inputs and compare hashes per
//! tick. Changing the seed of a stochastic variant must be reported as a
//! divergence.

use smallvec::smallvec;
use tessera_core::{Dims, TickId};
use tessera_engine::{AutomatonConfig, HeightMap, InitialRow, Pattern, SeedData, Variant, World};
use tessera_replay::{
    compare_worlds, verify_determinism, world_hashes, HashTrace, ReplayError,
};
use tessera_rules::{ScheduledIntervention, TerrainIntervention};
use tessera_space::BoundaryPolicy;

// ── Helpers ─────────────────────────────────────────────────────────

fn virus_config(seed: u64) -> AutomatonConfig {
    AutomatonConfig::new(
        Variant::LifeVirus {
            infection_probability: 0.5,
        },
        Dims::Plane { rows: 24, cols: 24 },
    )
    .ticks(20)
    .seed(seed)
}

fn terrain_config() -> AutomatonConfig {
    AutomatonConfig::new(
        Variant::Terrain {
            rain_intensity: 5.0,
        },
        Dims::Plane { rows: 16, cols: 16 },
    )
    .boundary(BoundaryPolicy::Reflective)
    .ticks(12)
    .seed(77)
    .intervention(ScheduledIntervention::new(
        3u64,
        TerrainIntervention::PlaceBarrier {
            center: smallvec![8, 8],
            radius: 2,
        },
    ))
    .intervention(ScheduledIntervention::new(
        5u64,
        TerrainIntervention::ExtinguishFire {
            center: smallvec![2, 2],
            radius: 3,
        },
    ))
}

fn terrain_seed() -> SeedData {
    let pixels: Vec<u8> = (0..256u32).map(|i| ((i * 37) % 256) as u8).collect();
    SeedData::Terrain {
        height_map: HeightMap::from_luma(&pixels, 16, 16).unwrap(),
        ignition: vec![smallvec![2, 2], smallvec![13, 4]],
    }
}

fn run(config: &AutomatonConfig, seed_data: SeedData) -> World {
    let mut world = World::initialize(config, seed_data).unwrap();
    world.run().unwrap();
    world
}

// ── Same inputs, same hashes ────────────────────────────────────────

#[test]
fn virus_same_seed_same_hashes() {
    let a = run(&virus_config(5), SeedData::Life(Pattern::Random));
    let b = run(&virus_config(5), SeedData::Life(Pattern::Random));
    assert_eq!(world_hashes(&a), world_hashes(&b));
    assert_eq!(world_hashes(&a).len(), 21);
    assert_eq!(compare_worlds(&a, &b).unwrap(), None);
}

#[test]
fn every_variant_is_deterministic() {
    let cases = [
        (virus_config(1), SeedData::Life(Pattern::Random)),
        (
            AutomatonConfig::new(Variant::LifeBattle, Dims::Plane { rows: 20, cols: 20 }).seed(3),
            SeedData::Life(Pattern::RandomFactions),
        ),
        (
            AutomatonConfig::new(Variant::Rule1d { rule_seed: 414_420 }, Dims::Line { len: 33 })
                .seed(8),
            SeedData::Row(InitialRow::Random),
        ),
        (terrain_config(), terrain_seed()),
    ];
    for (config, seed_data) in cases {
        assert_eq!(
            verify_determinism(&config, seed_data).unwrap(),
            None,
            "{}",
            config.variant.kind()
        );
    }
}

#[test]
fn recorded_trace_replays_cleanly() {
    let config = terrain_config();
    let world = run(&config, terrain_seed());
    let trace = HashTrace::record(&config, &world);
    assert_eq!(trace.grid_hashes().len(), 13);
    assert!(trace.aux_hash().is_some());
    assert_eq!(trace.verify(&config, terrain_seed()).unwrap(), None);
}

// ── Divergence ──────────────────────────────────────────────────────

#[test]
fn virus_different_seed_diverges() {
    // Same initial grid; only the per-tick infection draws differ.
    let start = SeedData::Life(Pattern::GliderGun);
    let config = |seed| {
        AutomatonConfig::new(
            Variant::LifeVirus {
                infection_probability: 0.5,
            },
            Dims::Plane { rows: 24, cols: 40 },
        )
        .ticks(20)
        .seed(seed)
    };
    let a = run(&config(1), start.clone());
    let b = run(&config(2), start);
    let report = compare_worlds(&a, &b).unwrap().expect("seeds should diverge");
    assert!(report.tick > TickId(0));
    assert!(!report.cells.is_empty());
    assert_ne!(report.recorded_hash, report.replayed_hash);
}

#[test]
fn different_initial_seed_diverges_at_tick_zero() {
    let a = run(&virus_config(1), SeedData::Life(Pattern::Random));
    let b = run(&virus_config(2), SeedData::Life(Pattern::Random));
    let report = compare_worlds(&a, &b).unwrap().unwrap();
    assert_eq!(report.tick, TickId(0));
}

#[test]
fn trace_rejects_changed_config() {
    let config = virus_config(5);
    let world = run(&config, SeedData::Life(Pattern::Random));
    let trace = HashTrace::record(&config, &world);
    let result = trace.verify(&virus_config(6), SeedData::Life(Pattern::Random));
    assert!(matches!(result, Err(ReplayError::ConfigMismatch { .. })));
}

#[test]
fn trace_detects_changed_seed_data() {
    let config = terrain_config();
    let world = run(&config, terrain_seed());
    let trace = HashTrace::record(&config, &world);
    let other = SeedData::Terrain {
        height_map: HeightMap::flat(16, 16, 50),
        ignition: Vec::new(),
    };
    let report = trace.verify(&config, other).unwrap().unwrap();
    assert_eq!(report.tick, TickId(0));
}

#[test]
fn variants_never_compare_equal() {
    let life = run(
        &AutomatonConfig::new(Variant::LifeStandard, Dims::Plane { rows: 4, cols: 4 }).ticks(1),
        SeedData::Life(Pattern::Block),
    );
    let line = run(
        &AutomatonConfig::new(Variant::Rule1d { rule_seed: 30_110 }, Dims::Line { len: 16 }).ticks(1),
        SeedData::Row(InitialRow::Centered),
    );
    assert!(compare_worlds(&life, &line).unwrap().is_some());
}
