//! Reusable rule fixtures for engine testing.
//!
//! - [`IdentityRule`]: every cell keeps its state; counts sweeps.
//! - [`Probe`]: an intervention [`IdentityRule`] declares but never
//!   handles, for exercising the error path of scheduled interventions.

use rand_chacha::ChaCha8Rng;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use tessera_core::{CellState, RuleError};
use tessera_rule::{Intervention, Neighbourhood, Rule, SweepContext, SweepStats};

/// Intervention with no effect, rejected by [`IdentityRule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probe;

impl Intervention for Probe {
    fn name(&self) -> &'static str {
        "probe"
    }
}

/// Keeps every cell in its current state.
///
/// Uses `AtomicUsize` for the sweep counter so it satisfies `Send`.
pub struct IdentityRule<S> {
    sweeps: AtomicUsize,
    _state: PhantomData<fn() -> S>,
}

impl<S: CellState> IdentityRule<S> {
    pub fn new() -> Self {
        Self {
            sweeps: AtomicUsize::new(0),
            _state: PhantomData,
        }
    }

    /// How many times `sweep()` has run.
    pub fn sweeps(&self) -> usize {
        self.sweeps.load(Ordering::Relaxed)
    }
}

impl<S: CellState> Default for IdentityRule<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CellState> Rule for IdentityRule<S> {
    type State = S;
    type Intervention = Probe;

    fn name(&self) -> &str {
        "identity"
    }

    fn evaluate_cell(&self, cell: &Neighbourhood<'_, S>, _rng: &mut ChaCha8Rng) -> S {
        cell.state()
    }

    fn sweep(&self, ctx: &mut SweepContext<'_, S>) -> Result<SweepStats, RuleError> {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
        ctx.check_lengths()?;
        let previous = ctx.previous();
        ctx.next_mut().cells_mut().copy_from_slice(previous.cells());
        Ok(SweepStats::default())
    }
}
