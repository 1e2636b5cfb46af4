//! Strongly-typed identifiers and the [`Coord`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Monotonically increasing tick counter.
///
/// `TickId(0)` is the initial state; each completed tick advances the
/// counter by one. A history of `n` ticks therefore spans `TickId(0)`
/// through `TickId(n)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A coordinate in a lattice.
///
/// `[i]` on a line, `[row, col]` on a plane. Uses `SmallVec<[i32; 4]>`
/// so neighbour enumeration never touches the heap.
pub type Coord = SmallVec<[i32; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_next_increments() {
        assert_eq!(TickId(0).next(), TickId(1));
        assert_eq!(TickId(41).next(), TickId(42));
    }

    #[test]
    fn tick_display() {
        assert_eq!(TickId(7).to_string(), "7");
    }
}
