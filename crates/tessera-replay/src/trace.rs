//! Recorded hash traces and determinism checks.

use tessera_engine::{AutomatonConfig, SeedData, World};

use crate::compare::{compare_worlds, replay_and_compare, world_hashes, DivergenceReport};
use crate::error::ReplayError;
use crate::hash::{aux_hash, config_hash, grid_hash};

/// Per-snapshot hashes of one run, plus its configuration hash.
///
/// A trace is the exportable summary of a run: two runs with equal
/// traces produced identical histories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashTrace {
    config_hash: u64,
    grid_hashes: Vec<u64>,
    aux_hash: Option<u64>,
}

impl HashTrace {
    /// Summarise `world`, which was initialised from `config`.
    pub fn record(config: &AutomatonConfig, world: &World) -> Self {
        Self {
            config_hash: config_hash(config),
            grid_hashes: world_hashes(world),
            aux_hash: final_aux_hash(world),
        }
    }

    /// Hash of the configuration the trace was recorded under.
    pub fn config_hash(&self) -> u64 {
        self.config_hash
    }

    /// One hash per snapshot, tick 0 first.
    pub fn grid_hashes(&self) -> &[u64] {
        &self.grid_hashes
    }

    /// Hash of the final auxiliary fields, for terrain runs.
    pub fn aux_hash(&self) -> Option<u64> {
        self.aux_hash
    }

    /// Re-run `config` from `seed_data` and compare against this trace.
    ///
    /// Returns the first divergent tick. A difference only in the final
    /// auxiliary fields is reported at the last tick with the field
    /// hashes.
    pub fn verify(
        &self,
        config: &AutomatonConfig,
        seed_data: SeedData,
    ) -> Result<Option<DivergenceReport>, ReplayError> {
        let current = config_hash(config);
        if current != self.config_hash {
            return Err(ReplayError::ConfigMismatch {
                recorded: self.config_hash,
                current,
            });
        }

        let mut world = World::initialize(config, seed_data)?;
        let divergence = replay_and_compare(&self.grid_hashes, &mut |tick| {
            if tick.0 > 0 {
                world.step()?;
            }
            Ok(latest_grid_hash(&world))
        })?;
        if divergence.is_some() {
            return Ok(divergence);
        }

        let replayed_aux = final_aux_hash(&world);
        if replayed_aux != self.aux_hash {
            return Ok(Some(DivergenceReport {
                tick: world.current_tick(),
                recorded_hash: self.aux_hash.unwrap_or_default(),
                replayed_hash: replayed_aux.unwrap_or_default(),
                cells: Vec::new(),
            }));
        }
        Ok(None)
    }
}

fn latest_grid_hash(world: &World) -> u64 {
    match world {
        World::Terrain(e) => grid_hash(e.grid()),
        World::Life(e) => grid_hash(e.grid()),
        World::Rule1d(e) => grid_hash(e.grid()),
    }
}

fn final_aux_hash(world: &World) -> Option<u64> {
    world.as_terrain().and_then(|e| e.aux()).map(aux_hash)
}

/// Run `config` twice from the same seed data and report the first
/// divergence between the two histories, if any.
pub fn verify_determinism(
    config: &AutomatonConfig,
    seed_data: SeedData,
) -> Result<Option<DivergenceReport>, ReplayError> {
    let mut first = World::initialize(config, seed_data.clone())?;
    let mut second = World::initialize(config, seed_data)?;
    first.run()?;
    second.run()?;
    compare_worlds(&first, &second)
}
