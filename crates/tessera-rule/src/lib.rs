//! Rule trait and sweep context for Tessera automata.
//!
//! The [`Rule`] trait defines the per-cell `evaluate_cell` transition and
//! the whole-grid `sweep`, which by default pulls every cell's next state
//! from the pre-tick snapshot through a [`Neighbourhood`] view.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod rule;

pub use context::{Neighbourhood, SweepContext, SweepStats};
pub use rule::{Intervention, Rule};
