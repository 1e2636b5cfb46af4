//! Lattice topologies for Tessera automata.
//!
//! This crate defines the [`Space`] trait, the neighbourhood resolver
//! every rule sweep goes through, along with the two lattice backends
//! and the [`BoundaryPolicy`] that governs edge behaviour.
//!
//! # Backends
//!
//! - [`Line1D`]: 1D line, left/right neighbourhood
//! - [`Square8`]: 2D grid, Moore (8-connected) neighbourhood

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod line1d;
pub mod space;
pub mod square8;

mod grid2d;

#[cfg(test)]
pub(crate) mod compliance;

pub use boundary::BoundaryPolicy;
pub use error::SpaceError;
pub use line1d::Line1D;
pub use space::{Slots, Space};
pub use square8::{Square8, MOORE_OFFSETS};
