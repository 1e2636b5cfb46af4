//! Rule-table 1D automaton printed as a space-time diagram.
//!
//! Run with:
//!   cargo run --example rule1d -- [rule_seed] [periodic|absorbing]

use tessera_core::{Bit, Dims};
use tessera_engine::{AutomatonConfig, InitialRow, SeedData, Variant, World, DEFAULT_RULE_SEED};
use tessera_space::BoundaryPolicy;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rule_seed: i64 = args
        .next()
        .map(|s| s.parse().expect("integer rule seed"))
        .unwrap_or(DEFAULT_RULE_SEED);
    let boundary: BoundaryPolicy = args
        .next()
        .as_deref()
        .unwrap_or("periodic")
        .parse()
        .expect("known boundary");

    let config = AutomatonConfig::new(Variant::Rule1d { rule_seed }, Dims::Line { len: 64 })
        .boundary(boundary)
        .ticks(32);
    let mut world = World::initialize(&config, SeedData::Row(InitialRow::Centered)).expect("valid config");
    world.run().expect("run");

    let engine = world.as_rule1d().expect("1D world");
    println!("rules: {:?}", engine.rule().table().rules());
    for snapshot in engine.history().iter() {
        let line: String = snapshot
            .grid()
            .cells()
            .iter()
            .map(|&b| if b == Bit::One { '#' } else { ' ' })
            .collect();
        println!("{:>3} |{line}|", snapshot.tick().0);
    }
}
