//! Terrain flood and fire on a synthetic valley.
//!
//! Demonstrates:
//!   1. Building a height map from grayscale pixels
//!   2. Scheduling a barrier and a fire-fighting intervention
//!   3. Running to completion and reading the auxiliary fields
//!
//! Run with:
//!   RUST_LOG=info cargo run --example flood

use smallvec::smallvec;
use tessera_core::{Dims, TerrainState};
use tessera_engine::{AutomatonConfig, HeightMap, SeedData, Variant, World};
use tessera_rules::{ScheduledIntervention, TerrainIntervention};
use tessera_space::BoundaryPolicy;

const ROWS: u32 = 24;
const COLS: u32 = 32;

/// A valley: low in the middle column, rising towards both sides.
fn valley_pixels() -> Vec<u8> {
    let mid = COLS as i32 / 2;
    (0..ROWS)
        .flat_map(|_| (0..COLS as i32).map(move |c| ((c - mid).unsigned_abs() * 14).min(255) as u8))
        .collect()
}

fn glyph(state: TerrainState) -> char {
    match state {
        TerrainState::Land => '.',
        TerrainState::Flooded => '~',
        TerrainState::GreenArea => 'g',
        TerrainState::Rock => '^',
        TerrainState::Fire => '*',
    }
}

fn main() {
    env_logger::init();

    let config = AutomatonConfig::new(
        Variant::Terrain {
            rain_intensity: 5.0,
        },
        Dims::Plane {
            rows: ROWS,
            cols: COLS,
        },
    )
    .boundary(BoundaryPolicy::Absorbing)
    .ticks(15)
    .seed(2024)
    .intervention(ScheduledIntervention::new(
        4u64,
        TerrainIntervention::PlaceBarrier {
            center: smallvec![12, 16],
            radius: 2,
        },
    ))
    .intervention(ScheduledIntervention::new(
        6u64,
        TerrainIntervention::ExtinguishFire {
            center: smallvec![3, 16],
            radius: 4,
        },
    ));

    let height_map = HeightMap::from_luma(&valley_pixels(), ROWS, COLS).expect("pixel count");
    let seed = SeedData::Terrain {
        height_map,
        ignition: vec![smallvec![3, 16]],
    };
    let mut world = World::initialize(&config, seed).expect("valid config");
    let reports = world.run().expect("run");

    let engine = world.as_terrain().expect("terrain world");
    for report in &reports {
        println!(
            "tick {:>2}: {:>3} changes, {} interventions, {} us",
            report.tick.0, report.changes, report.interventions, report.metrics.total_us
        );
    }
    println!();
    for r in 0..ROWS {
        let row = engine.grid().row(r).expect("row in range");
        println!("{}", row.iter().copied().map(glyph).collect::<String>());
    }
    let aux = engine.aux().expect("terrain fields");
    let barriers = aux.barriers().iter().filter(|&&b| b).count();
    println!(
        "\nflooded: {}  fire: {}  barriers: {barriers}",
        engine.grid().count(TerrainState::Flooded),
        engine.grid().count(TerrainState::Fire),
    );
}
