//! Core types and traits for the Tessera cellular-automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Tessera workspace:
//! identifiers, cell states, the state grid, auxiliary per-cell fields,
//! and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;
pub mod id;
pub mod state;

pub use error::{GridError, RuleError, StepError};
pub use field::{AuxField, AuxFields, FieldBounds};
pub use grid::{Dims, Grid};
pub use id::{Coord, TickId};
pub use state::{Bit, CellState, LifeState, TerrainState};
