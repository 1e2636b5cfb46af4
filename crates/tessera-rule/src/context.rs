//! Execution context passed to rules during a tick's sweep.
//!
//! [`SweepContext`] splits the tick's state into a frozen pre-tick grid,
//! a fresh next grid, the optional auxiliary fields, and the tick's
//! seeded generator. [`Neighbourhood`] is the per-cell read view built
//! from the frozen grid.

use rand_chacha::ChaCha8Rng;
use tessera_core::{AuxFields, CellState, Coord, Grid, RuleError, TickId};
use tessera_space::{BoundaryPolicy, Slots, Space};

/// Counters reported by one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// State transitions plus auxiliary-field transfers performed.
    pub changes: usize,
}

/// Execution context passed to [`Rule::sweep`](crate::Rule::sweep).
///
/// # Split-borrow semantics
///
/// - **`previous()`** is the pre-tick snapshot. Every state read during
///   a sweep goes through it, which is what makes the update synchronous.
/// - **`next_mut()`** is the grid being built. The engine seeds it from
///   the pre-tick snapshot, so a rule that leaves a cell alone keeps its
///   state.
/// - **`aux_mut()`** is the live auxiliary store. It is *not* snapshotted:
///   writes made while visiting one cell are visible to cells visited
///   later in the same sweep.
pub struct SweepContext<'a, S: CellState> {
    space: &'a dyn Space,
    previous: &'a Grid<S>,
    next: &'a mut Grid<S>,
    aux: Option<&'a mut AuxFields>,
    tick: TickId,
    rng: &'a mut ChaCha8Rng,
}

impl<'a, S: CellState> SweepContext<'a, S> {
    /// Construct a new sweep context.
    ///
    /// Typically called by the engine, not by rules directly.
    pub fn new(
        space: &'a dyn Space,
        previous: &'a Grid<S>,
        next: &'a mut Grid<S>,
        aux: Option<&'a mut AuxFields>,
        tick: TickId,
        rng: &'a mut ChaCha8Rng,
    ) -> Self {
        Self {
            space,
            previous,
            next,
            aux,
            tick,
            rng,
        }
    }

    /// Check that both grids and the auxiliary store match the space.
    pub fn check_lengths(&self) -> Result<(), RuleError> {
        let expected = self.space.cell_count();
        let lens = [
            Some(self.previous.len()),
            Some(self.next.len()),
            self.aux.as_ref().map(|a| a.len()),
        ];
        match lens.into_iter().flatten().find(|&n| n != expected) {
            Some(actual) => Err(RuleError::LengthMismatch { expected, actual }),
            None => Ok(()),
        }
    }

    /// Spatial topology. Use `space().downcast_ref::<T>()` for
    /// backend-specific fast paths.
    pub fn space(&self) -> &'a dyn Space {
        self.space
    }

    /// The frozen pre-tick grid.
    pub fn previous(&self) -> &'a Grid<S> {
        self.previous
    }

    /// The grid being produced by this sweep.
    pub fn next_mut(&mut self) -> &mut Grid<S> {
        self.next
    }

    /// Live auxiliary fields, if the simulation carries any.
    pub fn aux_mut(&mut self) -> Option<&mut AuxFields> {
        self.aux.as_deref_mut()
    }

    /// Current tick.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// The tick's seeded generator.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        self.rng
    }

    /// Borrow the next grid, the auxiliary fields and the generator at
    /// once, for sweeps that write fields while building the next grid.
    pub fn parts_mut(&mut self) -> (&mut Grid<S>, Option<&mut AuxFields>, &mut ChaCha8Rng) {
        (&mut *self.next, self.aux.as_deref_mut(), &mut *self.rng)
    }
}

/// Read view of one cell and its neighbours in the pre-tick grid.
///
/// Slot `k` holds the state at the backend's `k`-th offset, or `None`
/// where that offset falls off a non-periodic edge.
pub struct Neighbourhood<'a, S: CellState> {
    index: usize,
    state: S,
    slots: Slots<S>,
    previous: &'a Grid<S>,
    space: &'a dyn Space,
    aux: Option<&'a AuxFields>,
}

impl<'a, S: CellState> Neighbourhood<'a, S> {
    /// Resolve the neighbourhood of cell `index` under `policy`.
    ///
    /// # Panics
    ///
    /// If `index >= previous.len()`. Sweeps only visit indices below
    /// the space's cell count, which is checked up front.
    pub fn new(
        index: usize,
        space: &'a dyn Space,
        previous: &'a Grid<S>,
        policy: BoundaryPolicy,
    ) -> Self {
        let cells = previous.cells();
        let slots = space
            .neighbour_index_slots(index, policy)
            .into_iter()
            .map(|slot| slot.map(|i| cells[i]))
            .collect();
        Self {
            index,
            state: cells[index],
            slots,
            previous,
            space,
            aux: None,
        }
    }

    /// Attach a read-only view of the auxiliary fields.
    pub fn with_aux(mut self, aux: &'a AuxFields) -> Self {
        self.aux = Some(aux);
        self
    }

    /// Flat index of the cell.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Coordinate of the cell.
    pub fn coord(&self) -> Coord {
        self.previous.dims().coord_of(self.index)
    }

    /// Pre-tick state of the cell.
    pub fn state(&self) -> S {
        self.state
    }

    /// Neighbour slots in backend order.
    pub fn slots(&self) -> &[Option<S>] {
        &self.slots
    }

    /// States of the neighbours that exist, skipping empty slots.
    pub fn present(&self) -> impl Iterator<Item = S> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Number of existing neighbours whose state is live.
    pub fn live_count(&self) -> usize {
        self.present().filter(|s| s.is_live()).count()
    }

    /// Number of existing neighbours in `state`.
    pub fn count(&self, state: S) -> usize {
        self.present().filter(|&s| s == state).count()
    }

    /// State in slot `k`, with the background state substituted for a
    /// missing neighbour.
    pub fn state_or_background(&self, k: usize) -> S {
        self.slots.get(k).copied().flatten().unwrap_or_default()
    }

    /// Neighbour slots of the same cell resolved under a different policy.
    pub fn slots_under(&self, policy: BoundaryPolicy) -> Slots<S> {
        let cells = self.previous.cells();
        self.space
            .neighbour_index_slots(self.index, policy)
            .into_iter()
            .map(|slot| slot.map(|i| cells[i]))
            .collect()
    }

    /// Auxiliary fields, when attached.
    pub fn aux(&self) -> Option<&'a AuxFields> {
        self.aux
    }
}
