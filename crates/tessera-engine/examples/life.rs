//! Game of Life in all three modes.
//!
//! Run with:
//!   cargo run --example life -- [glider|glider-gun|oscillator|block|random] [periodic|absorbing|reflective]

use tessera_core::{Dims, Grid, LifeState};
use tessera_engine::{AutomatonConfig, Pattern, SeedData, Variant, World};
use tessera_space::BoundaryPolicy;

fn print(grid: &Grid<LifeState>) {
    for r in 0..grid.dims().rows() {
        let row = grid.row(r).expect("row in range");
        let line: String = row
            .iter()
            .map(|s| match s {
                LifeState::Dead => '.',
                LifeState::Alive => 'O',
                LifeState::Infected => 'X',
            })
            .collect();
        println!("{line}");
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let pattern: Pattern = args
        .next()
        .as_deref()
        .unwrap_or("glider-gun")
        .parse()
        .expect("known pattern");
    let boundary: BoundaryPolicy = args
        .next()
        .as_deref()
        .unwrap_or("periodic")
        .parse()
        .expect("known boundary");

    let dims = Dims::Plane { rows: 20, cols: 40 };
    for variant in [
        Variant::LifeStandard,
        Variant::LifeVirus {
            infection_probability: 0.1,
        },
        Variant::LifeBattle,
    ] {
        let seed = match (&variant, &pattern) {
            (Variant::LifeBattle, Pattern::Random) => Pattern::RandomFactions,
            _ => pattern.clone(),
        };
        let config = AutomatonConfig::new(variant, dims).boundary(boundary).ticks(30).seed(7);
        let mut world = World::initialize(&config, SeedData::Life(seed)).expect("valid config");
        world.run().expect("run");

        let engine = world.as_life().expect("life world");
        println!("== {} after {} ticks ==", world.rule_name(), engine.current_tick());
        print(engine.grid());
        println!();
    }
}
