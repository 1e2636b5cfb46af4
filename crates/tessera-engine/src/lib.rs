//! Tick engine orchestrating Tessera automata.
//!
//! [`World::initialize`] validates an [`AutomatonConfig`], lays out the
//! [`SeedData`], and builds a [`TickEngine`] for the configured variant.
//! Each tick applies scheduled interventions, sweeps the rule, and
//! appends a snapshot to the run's [`History`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod history;
pub mod metrics;
pub mod seed;
pub mod tick;
pub mod world;

pub use config::{
    AutomatonConfig, ConfigError, Variant, VariantKind, DEFAULT_RULE_SEED, DEFAULT_TICKS,
};
pub use history::{History, Snapshot};
pub use metrics::StepMetrics;
pub use seed::{terrain_initial, HeightMap, InitialRow, Pattern, SeedData};
pub use tick::{EngineConfig, StepReport, TickEngine};
pub use world::World;
