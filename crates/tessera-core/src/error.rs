//! Error types shared across the Tessera workspace.
//!
//! Configuration errors live with the engine's config; the types here
//! cover grid access, rule evaluation, and stepping.

use crate::grid::Dims;
use crate::id::{Coord, TickId};
use std::error::Error;
use std::fmt;

/// Errors from direct grid access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A cell vector does not match the grid dimensions.
    LengthMismatch {
        /// `dims.cell_count()`.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// The grid dimensions.
        dims: Dims,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::CoordOutOfBounds { coord, dims } => {
                write!(f, "coordinate {coord:?} outside grid {dims:?}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from rule evaluation and interventions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The rule does not support the requested intervention.
    UnsupportedIntervention {
        /// Name of the rule.
        rule: String,
        /// Name of the intervention.
        intervention: &'static str,
    },
    /// Grid, auxiliary fields, and space disagree on the cell count.
    LengthMismatch {
        /// Cell count of the space.
        expected: usize,
        /// Length found in the grid or field store.
        actual: usize,
    },
    /// An intervention targets a coordinate outside the lattice.
    Grid(GridError),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedIntervention { rule, intervention } => {
                write!(f, "rule '{rule}' does not support '{intervention}'")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "cell count mismatch: space has {expected}, buffer has {actual}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for RuleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for RuleError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from advancing a simulation by one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The configured tick budget is exhausted.
    RunComplete {
        /// Number of ticks the run was configured for.
        ticks: u64,
    },
    /// The rule failed while sweeping or applying an intervention.
    Rule {
        /// Tick during which the failure happened.
        tick: TickId,
        /// The underlying rule error.
        reason: RuleError,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RunComplete { ticks } => write!(f, "run complete after {ticks} ticks"),
            Self::Rule { tick, reason } => write!(f, "rule failed at tick {tick}: {reason}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rule { reason, .. } => Some(reason),
            Self::RunComplete { .. } => None,
        }
    }
}
