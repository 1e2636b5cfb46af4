//! Cell state enumerations and the [`CellState`] trait.
//!
//! Each automaton variant has its own closed set of states. Grids are
//! generic over the state type, so a terrain grid can never hold a
//! Game-of-Life state and every cell always holds exactly one valid value.

use std::fmt::Debug;
use std::hash::Hash;

/// A small closed enumeration stored in every cell of a [`Grid`](crate::Grid).
pub trait CellState: Copy + Eq + Hash + Debug + Default + Send + Sync + 'static {
    /// Stable numeric code, used for hashing and export.
    fn code(self) -> u8;

    /// Inverse of [`code`](Self::code). Returns `None` for unknown codes.
    fn from_code(code: u8) -> Option<Self>;

    /// Whether the cell counts as live for neighbour tallies.
    fn is_live(self) -> bool;
}

/// Terrain flood/fire states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TerrainState {
    /// Dry ground. Floods once the water level exceeds terrain height.
    #[default]
    Land,
    /// Flooded ground. Never reverts.
    Flooded,
    /// Vegetation. Ignites next to fire when humidity is low.
    GreenArea,
    /// Inert high ground.
    Rock,
    /// Burning vegetation.
    Fire,
}

impl CellState for TerrainState {
    fn code(self) -> u8 {
        match self {
            Self::Land => 0,
            Self::Flooded => 1,
            Self::GreenArea => 2,
            Self::Rock => 3,
            Self::Fire => 4,
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Land),
            1 => Some(Self::Flooded),
            2 => Some(Self::GreenArea),
            3 => Some(Self::Rock),
            4 => Some(Self::Fire),
            _ => None,
        }
    }

    fn is_live(self) -> bool {
        matches!(self, Self::Flooded | Self::Fire)
    }
}

/// Game-of-Life states.
///
/// The meaning of [`Infected`](LifeState::Infected) depends on the mode:
/// in virus mode it is a one-tick infection, in battle mode it is the
/// second faction (with [`Alive`](LifeState::Alive) as the first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifeState {
    /// Empty cell (faction 0 in battle mode).
    #[default]
    Dead,
    /// Live cell (faction 1 in battle mode).
    Alive,
    /// Infected cell in virus mode, faction 2 in battle mode.
    Infected,
}

impl LifeState {
    /// Battle-mode faction index: 0, 1 or 2.
    pub fn faction(self) -> usize {
        self.code() as usize
    }

    /// Inverse of [`faction`](Self::faction).
    pub fn from_faction(faction: usize) -> Option<Self> {
        u8::try_from(faction).ok().and_then(Self::from_code)
    }
}

impl CellState for LifeState {
    fn code(self) -> u8 {
        match self {
            Self::Dead => 0,
            Self::Alive => 1,
            Self::Infected => 2,
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Dead),
            1 => Some(Self::Alive),
            2 => Some(Self::Infected),
            _ => None,
        }
    }

    fn is_live(self) -> bool {
        self != Self::Dead
    }
}

/// Binary state of a 1D rule-table automaton cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bit {
    /// Inactive.
    #[default]
    Zero,
    /// Active.
    One,
}

impl Bit {
    /// The bit as 0 or 1.
    pub fn as_u8(self) -> u8 {
        self.code()
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b {
            Self::One
        } else {
            Self::Zero
        }
    }
}

impl CellState for Bit {
    fn code(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            _ => None,
        }
    }

    fn is_live(self) -> bool {
        self == Self::One
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_codes_roundtrip<S: CellState>(states: &[S]) {
        for &s in states {
            assert_eq!(S::from_code(s.code()), Some(s));
        }
        assert_eq!(S::from_code(u8::MAX), None);
    }

    #[test]
    fn codes_are_stable() {
        assert_codes_roundtrip(&[
            TerrainState::Land,
            TerrainState::Flooded,
            TerrainState::GreenArea,
            TerrainState::Rock,
            TerrainState::Fire,
        ]);
        assert_codes_roundtrip(&[LifeState::Dead, LifeState::Alive, LifeState::Infected]);
        assert_codes_roundtrip(&[Bit::Zero, Bit::One]);
    }

    #[test]
    fn defaults_are_background_states() {
        assert_eq!(TerrainState::default(), TerrainState::Land);
        assert_eq!(LifeState::default(), LifeState::Dead);
        assert_eq!(Bit::default(), Bit::Zero);
    }

    #[test]
    fn life_liveness_ignores_faction() {
        assert!(!LifeState::Dead.is_live());
        assert!(LifeState::Alive.is_live());
        assert!(LifeState::Infected.is_live());
    }

    #[test]
    fn factions_map_to_states() {
        assert_eq!(LifeState::from_faction(0), Some(LifeState::Dead));
        assert_eq!(LifeState::from_faction(2), Some(LifeState::Infected));
        assert_eq!(LifeState::from_faction(3), None);
        assert_eq!(LifeState::Alive.faction(), 1);
    }
}
