//! Divergence detection between recorded and replayed runs.
//!
//! Comparison is hash-first: equal hashes end the check for a tick. On a
//! mismatch with both grids available, every differing cell is listed.

use tessera_core::{CellState, Coord, Grid, TickId};
use tessera_engine::{History, World};

use crate::error::ReplayError;
use crate::hash::grid_hash;

/// One cell whose state differs between two runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellDivergence {
    /// Row-major cell index.
    pub cell_index: usize,
    /// Coordinate of the cell.
    pub coord: Coord,
    /// State code in the recorded run.
    pub recorded: u8,
    /// State code in the replayed run.
    pub replayed: u8,
}

/// The first tick at which two runs differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Snapshot tick that differs.
    pub tick: TickId,
    /// Hash of the recorded snapshot.
    pub recorded_hash: u64,
    /// Hash of the replayed snapshot.
    pub replayed_hash: u64,
    /// Differing cells; empty when only hashes were available.
    pub cells: Vec<CellDivergence>,
}

/// Compare two grids recorded at `tick`.
///
/// Returns `Ok(None)` when they hash equal.
pub fn compare_grids<S: CellState>(
    recorded: &Grid<S>,
    replayed: &Grid<S>,
    tick: TickId,
) -> Result<Option<DivergenceReport>, ReplayError> {
    if recorded.dims() != replayed.dims() {
        return Err(ReplayError::DimensionMismatch {
            recorded: recorded.dims(),
            replayed: replayed.dims(),
        });
    }
    let recorded_hash = grid_hash(recorded);
    let replayed_hash = grid_hash(replayed);
    if recorded_hash == replayed_hash {
        return Ok(None);
    }

    let dims = recorded.dims();
    let cells = recorded
        .cells()
        .iter()
        .zip(replayed.cells())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, (a, b))| CellDivergence {
            cell_index: i,
            coord: dims.coord_of(i),
            recorded: a.code(),
            replayed: b.code(),
        })
        .collect();

    Ok(Some(DivergenceReport {
        tick,
        recorded_hash,
        replayed_hash,
        cells,
    }))
}

/// First divergence between two histories, tick by tick.
///
/// A divergence within the shared prefix is reported before a length
/// difference.
pub fn compare_histories<S: CellState>(
    recorded: &History<S>,
    replayed: &History<S>,
) -> Result<Option<DivergenceReport>, ReplayError> {
    for (rec, rep) in recorded.iter().zip(replayed.iter()) {
        if let Some(report) = compare_grids(rec.grid(), rep.grid(), rec.tick())? {
            return Ok(Some(report));
        }
    }
    if recorded.len() != replayed.len() {
        return Err(ReplayError::LengthMismatch {
            recorded: recorded.len(),
            replayed: replayed.len(),
        });
    }
    Ok(None)
}

/// First divergence between the histories of two worlds.
///
/// Worlds of different variants never compare equal: their tick-0
/// snapshots are reported as diverging with hashes only.
pub fn compare_worlds(recorded: &World, replayed: &World) -> Result<Option<DivergenceReport>, ReplayError> {
    match (recorded, replayed) {
        (World::Terrain(a), World::Terrain(b)) => compare_histories(a.history(), b.history()),
        (World::Life(a), World::Life(b)) => compare_histories(a.history(), b.history()),
        (World::Rule1d(a), World::Rule1d(b)) => compare_histories(a.history(), b.history()),
        _ => Ok(Some(DivergenceReport {
            tick: TickId(0),
            recorded_hash: world_hashes(recorded).first().copied().unwrap_or_default(),
            replayed_hash: world_hashes(replayed).first().copied().unwrap_or_default(),
            cells: Vec::new(),
        })),
    }
}

/// One grid hash per snapshot of `world`.
pub fn world_hashes(world: &World) -> Vec<u64> {
    match world {
        World::Terrain(e) => e.history().grids().map(grid_hash).collect(),
        World::Life(e) => e.history().grids().map(grid_hash).collect(),
        World::Rule1d(e) => e.history().grids().map(grid_hash).collect(),
    }
}

/// Drive a run through `step_fn` and compare against recorded hashes.
///
/// `step_fn` is called once per recorded hash with the snapshot tick it
/// must produce: for tick 0 it returns the hash of the initial grid, for
/// later ticks it advances the run once and returns the new hash.
/// Returns the first mismatch, with hashes only.
pub fn replay_and_compare(
    recorded: &[u64],
    step_fn: &mut dyn FnMut(TickId) -> Result<u64, ReplayError>,
) -> Result<Option<DivergenceReport>, ReplayError> {
    for (i, &recorded_hash) in recorded.iter().enumerate() {
        let tick = TickId(i as u64);
        let replayed_hash = step_fn(tick)?;
        if replayed_hash != recorded_hash {
            return Ok(Some(DivergenceReport {
                tick,
                recorded_hash,
                replayed_hash,
                cells: Vec::new(),
            }));
        }
    }
    Ok(None)
}
