//! Error types for hashing and comparison.

use std::fmt;

use tessera_core::{Dims, StepError};
use tessera_engine::ConfigError;

/// Errors from recording, replaying or comparing runs.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplayError {
    /// A run could not be initialised.
    Config(ConfigError),
    /// A run failed while stepping.
    Step(StepError),
    /// The two runs were configured differently.
    ConfigMismatch {
        /// Hash of the recorded configuration.
        recorded: u64,
        /// Hash of the current configuration.
        current: u64,
    },
    /// Grids of different shapes cannot be compared cell by cell.
    DimensionMismatch {
        /// Recorded grid dimensions.
        recorded: Dims,
        /// Replayed grid dimensions.
        replayed: Dims,
    },
    /// The runs recorded a different number of snapshots.
    LengthMismatch {
        /// Snapshots in the recording.
        recorded: usize,
        /// Snapshots in the replay.
        replayed: usize,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Step(e) => write!(f, "step: {e}"),
            Self::ConfigMismatch { recorded, current } => write!(
                f,
                "config hash mismatch: recorded={recorded:#018x}, current={current:#018x}"
            ),
            Self::DimensionMismatch { recorded, replayed } => {
                write!(f, "grid dimensions differ: recorded {recorded:?}, replayed {replayed:?}")
            }
            Self::LengthMismatch { recorded, replayed } => write!(
                f,
                "history length differs: recorded {recorded}, replayed {replayed}"
            ),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Step(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ReplayError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StepError> for ReplayError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}
