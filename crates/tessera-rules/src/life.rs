//! Game of Life and its virus and battle variants.
//!
//! All three modes count live neighbours (any state other than `Dead`)
//! under the space's boundary policy, and all three keep the standard
//! survival window of 2 or 3 live neighbours.
//!
//! - **Standard**: live cells survive on 2–3; dead cells are born `Alive`
//!   on exactly 3.
//! - **Virus**: `Alive` survives on 2–3; `Infected` always dies after one
//!   tick; a birth is `Infected` with probability
//!   `infection_probability`, otherwise `Alive`.
//! - **Battle**: `Alive` is faction 1 and `Infected` faction 2. Both
//!   survive on 2–3 live neighbours of any faction. A birth joins the
//!   faction with more cells among the 8 neighbours, tallied with
//!   periodic wrap regardless of the space's policy; ties go to faction 1.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::convert::Infallible;
use tessera_core::LifeState;
use tessera_rule::{Neighbourhood, Rule};
use tessera_space::BoundaryPolicy;

/// Infection probability used when none is configured.
pub const DEFAULT_INFECTION_PROBABILITY: f64 = 0.1;

/// Game-of-Life mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LifeRule {
    /// Conway's B3/S23.
    Standard,
    /// B3/S23 with one-tick infections on birth.
    Virus {
        /// Chance that a birth is `Infected`, in `[0, 1]`.
        infection_probability: f64,
    },
    /// Two competing factions.
    Battle,
}

impl LifeRule {
    /// Virus mode with the given infection probability.
    ///
    /// # Errors
    ///
    /// Returns `Err` unless `0 <= p <= 1`.
    pub fn virus(p: f64) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&p) {
            return Err(format!("infection_probability must be in [0, 1], got {p}"));
        }
        Ok(Self::Virus {
            infection_probability: p,
        })
    }

    fn survives(live: usize) -> bool {
        live == 2 || live == 3
    }

    /// Birth faction from the periodic tally of the cell's neighbours.
    fn battle_birth(cell: &Neighbourhood<'_, LifeState>) -> LifeState {
        let mut tally = [0usize; 3];
        for state in cell.slots_under(BoundaryPolicy::Periodic).into_iter().flatten() {
            tally[state.faction()] += 1;
        }
        // Dead neighbours do not vote.
        if tally[2] > tally[1] {
            LifeState::Infected
        } else {
            LifeState::Alive
        }
    }
}

impl Rule for LifeRule {
    type State = LifeState;
    type Intervention = Infallible;

    fn name(&self) -> &str {
        match self {
            Self::Standard => "life-standard",
            Self::Virus { .. } => "life-virus",
            Self::Battle => "life-battle",
        }
    }

    fn evaluate_cell(&self, cell: &Neighbourhood<'_, LifeState>, rng: &mut ChaCha8Rng) -> LifeState {
        let live = cell.live_count();
        match (self, cell.state()) {
            (_, LifeState::Dead) if live != 3 => LifeState::Dead,

            (Self::Standard, LifeState::Dead) => LifeState::Alive,
            (Self::Standard, _) if Self::survives(live) => LifeState::Alive,

            (Self::Virus { infection_probability }, LifeState::Dead) => {
                if rng.gen::<f64>() < *infection_probability {
                    LifeState::Infected
                } else {
                    LifeState::Alive
                }
            }
            (Self::Virus { .. }, LifeState::Alive) if Self::survives(live) => LifeState::Alive,

            (Self::Battle, LifeState::Dead) => Self::battle_birth(cell),
            (Self::Battle, faction) if Self::survives(live) => faction,

            _ => LifeState::Dead,
        }
    }
}
