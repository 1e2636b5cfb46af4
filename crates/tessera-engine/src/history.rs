//! Append-only snapshot history.

use tessera_core::{CellState, Grid, TickId};

/// The grid as it stood after a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<S: CellState> {
    tick: TickId,
    grid: Grid<S>,
}

impl<S: CellState> Snapshot<S> {
    /// Tick the snapshot was taken at. Tick 0 is the initial state.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// The recorded grid.
    pub fn grid(&self) -> &Grid<S> {
        &self.grid
    }
}

/// Ordered snapshots of one run.
///
/// Each entry is a deep copy; later ticks never alter earlier entries.
/// Only the engine appends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<S: CellState> {
    snapshots: Vec<Snapshot<S>>,
}

impl<S: CellState> History<S> {
    /// A history holding only the initial state at tick 0.
    pub(crate) fn new(initial: &Grid<S>) -> Self {
        Self {
            snapshots: vec![Snapshot {
                tick: TickId(0),
                grid: initial.clone(),
            }],
        }
    }

    pub(crate) fn push(&mut self, tick: TickId, grid: &Grid<S>) {
        debug_assert!(self.latest().tick < tick, "history ticks must increase");
        self.snapshots.push(Snapshot {
            tick,
            grid: grid.clone(),
        });
    }

    /// Drop everything after the initial snapshot.
    pub(crate) fn truncate_to_initial(&mut self) {
        self.snapshots.truncate(1);
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: a history starts with the initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot `i`, where 0 is the initial state.
    pub fn get(&self, i: usize) -> Option<&Snapshot<S>> {
        self.snapshots.get(i)
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Snapshot<S> {
        // The initial snapshot is never removed.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Snapshots in tick order.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot<S>> + '_ {
        self.snapshots.iter()
    }

    /// The grids in tick order.
    pub fn grids(&self) -> impl Iterator<Item = &Grid<S>> + '_ {
        self.snapshots.iter().map(|s| &s.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{Dims, LifeState};

    #[test]
    fn starts_with_initial_snapshot() {
        let g = Grid::<LifeState>::new(Dims::Plane { rows: 2, cols: 2 });
        let h = History::new(&g);
        assert_eq!(h.len(), 1);
        assert!(!h.is_empty());
        assert_eq!(h.latest().tick(), TickId(0));
        assert_eq!(h.latest().grid(), &g);
    }

    #[test]
    fn snapshots_are_deep_copies() {
        let mut g = Grid::<LifeState>::new(Dims::Plane { rows: 2, cols: 2 });
        let mut h = History::new(&g);
        g.cells_mut()[0] = LifeState::Alive;
        h.push(TickId(1), &g);
        g.cells_mut()[1] = LifeState::Alive;
        assert_eq!(h.get(0).unwrap().grid().live_count(), 0);
        assert_eq!(h.get(1).unwrap().grid().live_count(), 1);
        assert_eq!(g.live_count(), 2);
    }

    #[test]
    fn truncate_keeps_initial() {
        let g = Grid::<LifeState>::new(Dims::Line { len: 3 });
        let mut h = History::new(&g);
        h.push(TickId(1), &g);
        h.push(TickId(2), &g);
        assert_eq!(h.iter().map(|s| s.tick().0).collect::<Vec<_>>(), vec![0, 1, 2]);
        h.truncate_to_initial();
        assert_eq!(h.len(), 1);
        assert_eq!(h.grids().count(), 1);
    }
}
