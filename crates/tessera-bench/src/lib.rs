//! Benchmark profiles for the Tessera automaton engine.
//!
//! Each profile returns a configuration and its seed data:
//!
//! - [`life_profile`]: 100x100 torus (10K cells), random soup
//! - [`terrain_profile`]: 100x100 valley with fires and interventions
//! - [`rule1d_profile`]: 10K-cell line from a random row

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use smallvec::smallvec;
use tessera_core::Dims;
use tessera_engine::{AutomatonConfig, HeightMap, InitialRow, Pattern, SeedData, Variant};
use tessera_space::BoundaryPolicy;

/// Ticks per profile run; benches reset the world when it is spent.
pub const PROFILE_TICKS: u64 = 64;

const SIDE: u32 = 100;

/// Game of Life on a 100x100 torus from a random soup.
pub fn life_profile(variant: Variant, seed: u64) -> (AutomatonConfig, SeedData) {
    let pattern = match variant {
        Variant::LifeBattle => Pattern::RandomFactions,
        _ => Pattern::Random,
    };
    let config = AutomatonConfig::new(variant, Dims::Plane { rows: SIDE, cols: SIDE })
        .ticks(PROFILE_TICKS)
        .seed(seed);
    (config, SeedData::Life(pattern))
}

/// Terrain on a 100x100 valley with absorbing edges.
///
/// Heights rise linearly away from the middle column, so flooding
/// spreads outward from the valley floor.
pub fn terrain_profile(seed: u64) -> (AutomatonConfig, SeedData) {
    let mid = SIDE as i64 / 2;
    let pixels: Vec<u8> = (0..SIDE)
        .flat_map(|_| (0..SIDE as i64).map(move |c| ((c - mid).unsigned_abs() * 5).min(255) as u8))
        .collect();
    let height_map = HeightMap::from_luma(&pixels, SIDE, SIDE).expect("one pixel per cell");
    let config = AutomatonConfig::new(
        Variant::Terrain {
            rain_intensity: 5.0,
        },
        Dims::Plane { rows: SIDE, cols: SIDE },
    )
    .boundary(BoundaryPolicy::Absorbing)
    .ticks(PROFILE_TICKS)
    .seed(seed);
    let seed_data = SeedData::Terrain {
        height_map,
        ignition: vec![smallvec![10, 10], smallvec![90, 90]],
    };
    (config, seed_data)
}

/// The 1D rule on a 10K-cell periodic line from a random row.
pub fn rule1d_profile(rule_seed: i64, seed: u64) -> (AutomatonConfig, SeedData) {
    let config = AutomatonConfig::new(Variant::Rule1d { rule_seed }, Dims::Line { len: SIDE * SIDE })
        .ticks(PROFILE_TICKS)
        .seed(seed);
    (config, SeedData::Row(InitialRow::Random))
}
