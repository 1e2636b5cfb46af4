//! Scripted terrain interventions.
//!
//! Both interventions act on the clipped square `[c - r, c + r]` on each
//! axis around a centre cell. The square is never wrapped, whatever the
//! boundary policy.

use tessera_core::{AuxField, AuxFields, Coord, Grid, GridError, RuleError, TerrainState, TickId};
use tessera_rule::Intervention;
use tessera_space::Space;

/// Terrain height added to every cell of a barrier.
pub const BARRIER_RAISE: i32 = 50;

/// Humidity added to every extinguished cell (clamped to 100).
pub const EXTINGUISH_HUMIDITY: f32 = 50.0;

/// An edit to the terrain applied between ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerrainIntervention {
    /// Mark a dam: `barrier = true` and terrain raised by
    /// [`BARRIER_RAISE`] on every cell of the square.
    PlaceBarrier {
        /// Centre cell.
        center: Coord,
        /// Half-width of the square.
        radius: u32,
    },
    /// Put out fires: every `Fire` cell of the square becomes `Land`
    /// and gains [`EXTINGUISH_HUMIDITY`] humidity.
    ExtinguishFire {
        /// Centre cell.
        center: Coord,
        /// Half-width of the square.
        radius: u32,
    },
}

impl TerrainIntervention {
    /// Centre cell of the affected square.
    pub fn center(&self) -> &Coord {
        match self {
            Self::PlaceBarrier { center, .. } | Self::ExtinguishFire { center, .. } => center,
        }
    }

    /// Half-width of the affected square.
    pub fn radius(&self) -> u32 {
        match self {
            Self::PlaceBarrier { radius, .. } | Self::ExtinguishFire { radius, .. } => *radius,
        }
    }

    /// Apply to the live grid and fields. Returns the number of cells
    /// changed.
    pub fn apply(
        &self,
        space: &dyn Space,
        grid: &mut Grid<TerrainState>,
        aux: &mut AuxFields,
    ) -> Result<usize, RuleError> {
        let expected = space.cell_count();
        for actual in [grid.len(), aux.len()] {
            if actual != expected {
                return Err(RuleError::LengthMismatch { expected, actual });
            }
        }
        let region = space
            .square_region(self.center(), self.radius())
            .map_err(|_| GridError::CoordOutOfBounds {
                coord: self.center().clone(),
                dims: space.dims(),
            })?;

        let mut touched = 0;
        match self {
            Self::PlaceBarrier { .. } => {
                for i in region {
                    aux.set_barrier(i, true);
                    aux.raise_terrain(i, BARRIER_RAISE);
                    touched += 1;
                }
            }
            Self::ExtinguishFire { .. } => {
                let cells = grid.cells_mut();
                for i in region {
                    if cells[i] == TerrainState::Fire {
                        cells[i] = TerrainState::Land;
                        aux.add_scalar(AuxField::Humidity, i, EXTINGUISH_HUMIDITY);
                        touched += 1;
                    }
                }
            }
        }
        Ok(touched)
    }
}

impl Intervention for TerrainIntervention {
    fn name(&self) -> &'static str {
        match self {
            Self::PlaceBarrier { .. } => "place_barrier",
            Self::ExtinguishFire { .. } => "extinguish_fire",
        }
    }
}

/// An intervention bound to the tick before whose sweep it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledIntervention<I = TerrainIntervention> {
    /// Zero-based tick index; applied before that tick's sweep.
    pub tick: TickId,
    /// What to apply.
    pub intervention: I,
}

impl<I> ScheduledIntervention<I> {
    /// Schedule `intervention` before tick `tick`.
    pub fn new(tick: impl Into<TickId>, intervention: I) -> Self {
        Self {
            tick: tick.into(),
            intervention,
        }
    }
}
