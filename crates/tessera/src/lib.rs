//! Tessera: a discrete-state cellular-automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let config = AutomatonConfig::new(Variant::LifeStandard, Dims::Plane { rows: 8, cols: 8 })
//!     .boundary("periodic".parse().unwrap())
//!     .ticks(4);
//! let mut world = World::initialize(&config, SeedData::Life(Pattern::Glider)).unwrap();
//! let reports = world.run().unwrap();
//! assert_eq!(reports.len(), 4);
//!
//! let life = world.as_life().unwrap();
//! assert_eq!(life.history().len(), 5);
//! assert_eq!(life.grid().count(LifeState::Alive), 5);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Cell states, grids, auxiliary fields, errors |
//! | [`space`] | `tessera-space` | Boundary policies and neighbour resolution |
//! | [`rule`] | `tessera-rule` | The `Rule` trait and sweep context |
//! | [`rules`] | `tessera-rules` | Terrain, Game-of-Life and 1D rules; interventions |
//! | [`engine`] | `tessera-engine` | Configuration, seeding, tick engine, history |
//! | [`replay`] | `tessera-replay` | Snapshot hashing and determinism checks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`tessera-core`).
///
/// Cell states ([`types::TerrainState`], [`types::LifeState`],
/// [`types::Bit`]), the [`types::Grid`], auxiliary fields, and the error
/// types shared across crates.
pub use tessera_core as types;

/// Lattices and neighbour resolution (`tessera-space`).
///
/// [`space::Square8`] for 2D grids, [`space::Line1D`] for the 1D rule,
/// both parameterised by a [`space::BoundaryPolicy`].
pub use tessera_space as space;

/// The rule trait (`tessera-rule`).
///
/// [`rule::Rule`] is the extension point for custom automata.
pub use tessera_rule as rule;

/// Reference rules (`tessera-rules`).
pub use tessera_rules as rules;

/// Tick engine and run configuration (`tessera-engine`).
pub use tessera_engine as engine;

/// Snapshot hashing and determinism checks (`tessera-replay`).
pub use tessera_replay as replay;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessera_core::{
        AuxField, AuxFields, Bit, CellState, Coord, Dims, Grid, LifeState, TerrainState, TickId,
    };

    // Errors
    pub use tessera_core::{GridError, RuleError, StepError};

    // Space
    pub use tessera_space::{BoundaryPolicy, Space, SpaceError};

    // Rules
    pub use tessera_rule::{Intervention, Neighbourhood, Rule, SweepContext};
    pub use tessera_rules::{
        ElementaryRule, LifeRule, RuleTable, ScheduledIntervention, TerrainIntervention,
        TerrainRule,
    };

    // Engine
    pub use tessera_engine::{
        AutomatonConfig, ConfigError, HeightMap, History, InitialRow, Pattern, SeedData,
        Snapshot, StepMetrics, StepReport, TickEngine, Variant, VariantKind, World,
    };

    // Replay
    pub use tessera_replay::{verify_determinism, HashTrace};
}
