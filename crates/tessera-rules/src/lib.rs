//! Reference automata for the Tessera engine.
//!
//! - [`TerrainRule`]: rain, flood spread and fire spread over a height
//!   map, with [`TerrainIntervention`]s applied between ticks
//! - [`LifeRule`]: Game of Life in standard, virus and battle modes
//! - [`ElementaryRule`]: 1D automaton driven by a [`RuleTable`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod elementary;
pub mod intervention;
pub mod life;
pub mod terrain;

pub use elementary::{apply_rule, ElementaryRule, RuleTable, FIXED_RULE, MIN_SEED_DIGITS};
pub use intervention::{ScheduledIntervention, TerrainIntervention};
pub use life::{LifeRule, DEFAULT_INFECTION_PROBABILITY};
pub use terrain::{TerrainRule, DEFAULT_RAIN_INTENSITY};
