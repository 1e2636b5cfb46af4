//! Terrain flood and fire spread.
//!
//! Each tick:
//!
//! 1. Rain adds `rain_intensity` to every cell's water level.
//! 2. A row-major sweep visits every cell:
//!    - `Land` floods when its *current* water level exceeds its terrain
//!      height.
//!    - `GreenArea` ignites when a pre-tick neighbour is `Fire` and its
//!      humidity is below [`IGNITION_HUMIDITY`].
//!    - A pre-tick `Flooded` cell pushes water into every pre-tick `Land`
//!      neighbour with a lower level: `nb += FLOOD_SPREAD_RATE * (src - nb)`.
//!
//! State transitions read the pre-tick grid. Water does not: pushes land
//! in the live field, so a cell visited later in the same sweep sees the
//! water pushed by cells visited earlier. Outcomes therefore depend on
//! the row-major visiting order, and total water is not conserved.

use crate::intervention::TerrainIntervention;
use rand_chacha::ChaCha8Rng;
use tessera_core::{AuxField, AuxFields, Grid, RuleError, TerrainState};
use tessera_rule::{Neighbourhood, Rule, SweepContext, SweepStats};
use tessera_space::Space;

/// Default water added to every cell per tick.
pub const DEFAULT_RAIN_INTENSITY: f32 = 5.0;

/// Fraction of the level difference a flooded cell pushes per tick.
pub const FLOOD_SPREAD_RATE: f32 = 0.1;

/// Green areas at or above this humidity do not catch fire.
pub const IGNITION_HUMIDITY: f32 = 30.0;

/// Flood and fire spread over a height map.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainRule {
    rain_intensity: f32,
}

impl TerrainRule {
    /// A terrain rule with the given rain per tick.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `rain_intensity` is negative or not finite.
    pub fn new(rain_intensity: f32) -> Result<Self, String> {
        if !rain_intensity.is_finite() || rain_intensity < 0.0 {
            return Err(format!(
                "rain_intensity must be finite and >= 0, got {rain_intensity}"
            ));
        }
        Ok(Self { rain_intensity })
    }

    /// Water added to every cell per tick.
    pub fn rain_intensity(&self) -> f32 {
        self.rain_intensity
    }

    /// Push water from flooded cell `src` into its lower `Land`
    /// neighbours. Returns the number of transfers.
    fn push_water(
        src: usize,
        space: &dyn Space,
        previous: &[TerrainState],
        aux: &mut AuxFields,
    ) -> usize {
        let mut transfers = 0;
        for nb in space
            .neighbour_index_slots(src, space.boundary())
            .into_iter()
            .flatten()
        {
            if previous[nb] != TerrainState::Land {
                continue;
            }
            let source = aux.water_level(src);
            let level = aux.water_level(nb);
            if level < source {
                aux.add_scalar(
                    AuxField::WaterLevel,
                    nb,
                    FLOOD_SPREAD_RATE * (source - level),
                );
                transfers += 1;
            }
        }
        transfers
    }
}

impl Default for TerrainRule {
    fn default() -> Self {
        Self {
            rain_intensity: DEFAULT_RAIN_INTENSITY,
        }
    }
}

impl Rule for TerrainRule {
    type State = TerrainState;
    type Intervention = TerrainIntervention;

    fn name(&self) -> &str {
        "terrain"
    }

    fn evaluate_cell(
        &self,
        cell: &Neighbourhood<'_, TerrainState>,
        _rng: &mut ChaCha8Rng,
    ) -> TerrainState {
        let Some(aux) = cell.aux() else {
            return cell.state();
        };
        let i = cell.index();
        match cell.state() {
            TerrainState::Land if aux.water_level(i) > aux.terrain_height(i) as f32 => {
                TerrainState::Flooded
            }
            TerrainState::GreenArea
                if aux.humidity(i) < IGNITION_HUMIDITY
                    && cell.count(TerrainState::Fire) > 0 =>
            {
                TerrainState::Fire
            }
            other => other,
        }
    }

    fn uses_aux(&self) -> bool {
        true
    }

    fn sweep(&self, ctx: &mut SweepContext<'_, TerrainState>) -> Result<SweepStats, RuleError> {
        ctx.check_lengths()?;
        let space = ctx.space();
        let previous = ctx.previous();
        let policy = space.boundary();
        let n = space.cell_count();
        let (next, aux, rng) = ctx.parts_mut();
        let aux = aux.ok_or(RuleError::LengthMismatch {
            expected: n,
            actual: 0,
        })?;

        aux.add_uniform(AuxField::WaterLevel, self.rain_intensity);

        let mut stats = SweepStats::default();
        for i in 0..n {
            let state = {
                let cell = Neighbourhood::new(i, space, previous, policy).with_aux(aux);
                self.evaluate_cell(&cell, rng)
            };
            let before = previous.cells()[i];
            if state != before {
                stats.changes += 1;
            }
            next.cells_mut()[i] = state;
            if before == TerrainState::Flooded {
                stats.changes += Self::push_water(i, space, previous.cells(), aux);
            }
        }
        Ok(stats)
    }

    fn intervene(
        &self,
        intervention: &TerrainIntervention,
        space: &dyn Space,
        grid: &mut Grid<TerrainState>,
        aux: Option<&mut AuxFields>,
    ) -> Result<usize, RuleError> {
        let aux = aux.ok_or(RuleError::LengthMismatch {
            expected: space.cell_count(),
            actual: 0,
        })?;
        intervention.apply(space, grid, aux)
    }
}
