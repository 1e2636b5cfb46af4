//! Integration test: scripted terrain interventions.
//!
//! Interventions run before the sweep of the tick they are scheduled
//! for, so their effect first shows in the snapshot that tick produces.

use smallvec::smallvec;
use tessera_core::{Dims, TerrainState, TickId};
use tessera_engine::{AutomatonConfig, ConfigError, HeightMap, SeedData, Variant, World};
use tessera_rules::{ScheduledIntervention, TerrainIntervention};
use tessera_space::BoundaryPolicy;

fn terrain_config() -> AutomatonConfig {
    AutomatonConfig::new(
        Variant::Terrain {
            rain_intensity: 5.0,
        },
        Dims::Plane { rows: 8, cols: 8 },
    )
    .boundary(BoundaryPolicy::Absorbing)
    .ticks(4)
}

#[test]
fn barrier_lands_at_its_scheduled_tick() {
    let config = terrain_config().intervention(ScheduledIntervention::new(
        2u64,
        TerrainIntervention::PlaceBarrier {
            center: smallvec![0, 0],
            radius: 1,
        },
    ));
    let mut world = World::initialize(&config, SeedData::terrain(HeightMap::flat(8, 8, 40))).unwrap();

    let reports: Vec<_> = (0..2).map(|_| world.step().unwrap()).collect();
    assert!(reports.iter().all(|r| r.interventions == 0));
    let aux = world.as_terrain().unwrap().aux().unwrap();
    assert_eq!(aux.terrain_height(0), 40);
    assert!(!aux.is_barrier(0));

    let report = world.step().unwrap();
    assert_eq!(report.tick, TickId(3));
    assert_eq!(report.interventions, 1);
    // Clipped at the corner: rows 0..=1, cols 0..=1.
    assert_eq!(report.cells_touched, 4);
    let aux = world.as_terrain().unwrap().aux().unwrap();
    for i in [0, 1, 8, 9] {
        assert_eq!(aux.terrain_height(i), 90);
        assert!(aux.is_barrier(i));
    }
    assert_eq!(aux.terrain_height(2), 40);
    assert!(!aux.is_barrier(16));
}

#[test]
fn extinguish_turns_fire_into_land() {
    let config = terrain_config().intervention(ScheduledIntervention::new(
        1u64,
        TerrainIntervention::ExtinguishFire {
            center: smallvec![0, 0],
            radius: 0,
        },
    ));
    let seed = SeedData::Terrain {
        height_map: HeightMap::flat(8, 8, 40),
        ignition: vec![smallvec![0, 0]],
    };
    let mut world = World::initialize(&config, seed).unwrap();
    let humidity_before = world.as_terrain().unwrap().aux().unwrap().humidity(0);

    world.step().unwrap();
    assert_eq!(world.as_terrain().unwrap().grid().get(0), Some(TerrainState::Fire));

    world.step().unwrap();
    let engine = world.as_terrain().unwrap();
    assert_eq!(engine.grid().get(0), Some(TerrainState::Land));
    let expected = (humidity_before + 50.0).min(100.0);
    assert!((engine.aux().unwrap().humidity(0) - expected).abs() < 1e-4);
    assert_eq!(engine.history().get(1).unwrap().grid().get(0), Some(TerrainState::Fire));
}

#[test]
fn interventions_rejected_outside_terrain_or_grid() {
    let outside = ScheduledIntervention::new(
        0u64,
        TerrainIntervention::PlaceBarrier {
            center: smallvec![8, 8],
            radius: 1,
        },
    );
    let config = terrain_config().intervention(outside);
    let result = World::initialize(&config, SeedData::terrain(HeightMap::flat(8, 8, 40)));
    assert!(matches!(
        result,
        Err(ConfigError::InterventionOutOfBounds { tick: TickId(0), .. })
    ));
}

#[test]
fn reset_restores_initial_fields() {
    let config = terrain_config().intervention(ScheduledIntervention::new(
        0u64,
        TerrainIntervention::PlaceBarrier {
            center: smallvec![4, 4],
            radius: 2,
        },
    ));
    let mut world = World::initialize(&config, SeedData::terrain(HeightMap::flat(8, 8, 40))).unwrap();
    let initial = world.as_terrain().unwrap().aux().unwrap().clone();
    world.run().unwrap();
    assert_ne!(world.as_terrain().unwrap().aux().unwrap(), &initial);

    world.reset();
    assert_eq!(world.as_terrain().unwrap().aux().unwrap(), &initial);
    let rerun = world.run().unwrap();
    assert_eq!(rerun[0].interventions, 1);
    assert_eq!(rerun[0].cells_touched, 25);
}
