//! Snapshot hashing and determinism verification for Tessera runs.
//!
//! A run is summarised by a [`HashTrace`]: a hash of its configuration
//! and one FNV-1a hash per history snapshot. Traces from two runs are
//! compared tick by tick; the first mismatch is reported with the cells
//! that differ when both grids are at hand.
//!
//! - [`grid_hash`], [`aux_hash`] and [`config_hash`] hash single values
//! - [`compare_grids`] and [`compare_histories`] locate divergences
//! - [`replay_and_compare`] checks a fresh run against recorded hashes

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod trace;

pub use compare::{
    compare_grids, compare_histories, compare_worlds, replay_and_compare, world_hashes,
    CellDivergence, DivergenceReport,
};
pub use error::ReplayError;
pub use hash::{aux_hash, config_hash, grid_hash};
pub use trace::{verify_determinism, HashTrace};
