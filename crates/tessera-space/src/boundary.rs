//! Boundary policy for neighbour lookup at lattice edges.

use crate::error::SpaceError;
use std::fmt;
use std::str::FromStr;

/// How a lattice resolves neighbours that fall off its edge.
///
/// Under [`Periodic`](Self::Periodic) every offset resolves to an in-range
/// cell. Under the other two policies an out-of-range offset resolves to
/// nothing; the policies differ only in how rules interpret that gap:
/// - **Absorbing**: the missing neighbour reads as the background state
///   (0 for the 1D automaton).
/// - **Reflective**: the missing neighbour is skipped, so edge cells have
///   fewer neighbours.
///
/// For count-based rules the two are indistinguishable, since the
/// background state is never live.
///
/// # Examples
///
/// ```
/// use tessera_space::{BoundaryPolicy, Space, Square8};
///
/// let skip = Square8::new(4, 4, BoundaryPolicy::Reflective).unwrap();
/// let corner: tessera_core::Coord = vec![0i32, 0].into();
/// assert_eq!(skip.neighbours(&corner).len(), 3);
///
/// let torus = Square8::new(4, 4, BoundaryPolicy::Periodic).unwrap();
/// assert_eq!(torus.neighbours(&corner).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Wrap around on every axis (torus / ring).
    #[default]
    Periodic,
    /// Out-of-range neighbours read as the background state.
    Absorbing,
    /// Out-of-range neighbours are excluded.
    Reflective,
}

impl BoundaryPolicy {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Periodic => "periodic",
            Self::Absorbing => "absorbing",
            Self::Reflective => "reflective",
        }
    }

    /// `true` if out-of-range offsets wrap.
    pub fn wraps(self) -> bool {
        self == Self::Periodic
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryPolicy {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "periodic" => Ok(Self::Periodic),
            "absorbing" => Ok(Self::Absorbing),
            "reflective" => Ok(Self::Reflective),
            _ => Err(SpaceError::UnknownBoundary {
                name: s.to_string(),
            }),
        }
    }
}
