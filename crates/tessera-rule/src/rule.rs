//! The [`Rule`] and [`Intervention`] traits.
//!
//! A rule is a stateless transition over one cell state type. The engine
//! calls [`Rule::sweep`] once per tick; the default sweep visits every
//! cell in row-major order and asks [`Rule::evaluate_cell`] for its next
//! state, reading only the pre-tick grid.

use crate::context::{Neighbourhood, SweepContext, SweepStats};
use rand_chacha::ChaCha8Rng;
use std::convert::Infallible;
use std::fmt::Debug;
use tessera_core::{AuxFields, CellState, Grid, RuleError};
use tessera_space::Space;

/// A scripted edit a rule knows how to apply between ticks.
pub trait Intervention: Clone + Debug + Send + 'static {
    /// Short name for error reporting and logs.
    fn name(&self) -> &'static str;
}

/// Rules without interventions use `Infallible`.
impl Intervention for Infallible {
    fn name(&self) -> &'static str {
        match *self {}
    }
}

/// A stateless cellular-automaton transition rule.
///
/// # Contract
///
/// - `evaluate_cell()` and `sweep()` MUST be deterministic given the
///   context's generator: same inputs produce identical outputs.
/// - `&self`: rules carry parameters, never run state.
/// - State reads go through the pre-tick grid only. The sole exception a
///   rule may make is for auxiliary fields, which are live.
///
/// # Examples
///
/// A rule that turns every cell with a live neighbour alive:
///
/// ```
/// use rand_chacha::ChaCha8Rng;
/// use std::convert::Infallible;
/// use tessera_core::LifeState;
/// use tessera_rule::{Neighbourhood, Rule};
///
/// struct Spread;
///
/// impl Rule for Spread {
///     type State = LifeState;
///     type Intervention = Infallible;
///
///     fn name(&self) -> &str { "spread" }
///
///     fn evaluate_cell(&self, cell: &Neighbourhood<'_, LifeState>, _rng: &mut ChaCha8Rng) -> LifeState {
///         if cell.live_count() > 0 { LifeState::Alive } else { cell.state() }
///     }
/// }
///
/// assert_eq!(Spread.name(), "spread");
/// ```
pub trait Rule: Send + 'static {
    /// Cell state this rule evolves.
    type State: CellState;

    /// Interventions the rule accepts between ticks.
    type Intervention: Intervention;

    /// Human-readable name for error reporting and logs.
    fn name(&self) -> &str;

    /// Next state of one cell, computed from its pre-tick neighbourhood.
    fn evaluate_cell(
        &self,
        cell: &Neighbourhood<'_, Self::State>,
        rng: &mut ChaCha8Rng,
    ) -> Self::State;

    /// Whether the rule reads or writes auxiliary fields.
    ///
    /// Default: `false`. The engine only allocates fields when this holds.
    fn uses_aux(&self) -> bool {
        false
    }

    /// Produce the next grid for one tick.
    ///
    /// The default is a synchronous pull: every cell, in row-major order,
    /// gets `evaluate_cell` of its neighbourhood under the space's own
    /// boundary policy. No auxiliary fields are attached; rules that need
    /// them override this method.
    fn sweep(&self, ctx: &mut SweepContext<'_, Self::State>) -> Result<SweepStats, RuleError> {
        ctx.check_lengths()?;
        let space = ctx.space();
        let previous = ctx.previous();
        let policy = space.boundary();
        let mut stats = SweepStats::default();

        for index in 0..space.cell_count() {
            let cell = Neighbourhood::new(index, space, previous, policy);
            let next = self.evaluate_cell(&cell, ctx.rng());
            if next != cell.state() {
                stats.changes += 1;
            }
            ctx.next_mut().cells_mut()[index] = next;
        }
        Ok(stats)
    }

    /// Apply an intervention to the live grid and fields before a sweep.
    ///
    /// Returns the number of cells touched. The default rejects every
    /// intervention.
    fn intervene(
        &self,
        intervention: &Self::Intervention,
        _space: &dyn Space,
        _grid: &mut Grid<Self::State>,
        _aux: Option<&mut AuxFields>,
    ) -> Result<usize, RuleError> {
        Err(RuleError::UnsupportedIntervention {
            rule: self.name().to_string(),
            intervention: intervention.name(),
        })
    }
}
