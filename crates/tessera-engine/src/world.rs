//! [`World`]: one validated run of any variant.

use tessera_core::{StepError, TickId};
use tessera_rule::Rule;
use tessera_rules::{ElementaryRule, LifeRule, TerrainRule};

use crate::config::{AutomatonConfig, ConfigError, Variant};
use crate::seed::{terrain_initial, SeedData};
use crate::tick::{EngineConfig, StepReport, TickEngine};

/// A running automaton of one of the three variants.
///
/// ```
/// use tessera_core::Dims;
/// use tessera_engine::{AutomatonConfig, InitialRow, SeedData, Variant, World};
///
/// let config = AutomatonConfig::new(Variant::Rule1d { rule_seed: 414420 }, Dims::Line { len: 9 })
///     .ticks(5);
/// let mut world = World::initialize(&config, SeedData::Row(InitialRow::Centered)).unwrap();
/// world.run().unwrap();
/// assert_eq!(world.as_rule1d().unwrap().history().len(), 6);
/// ```
pub enum World {
    /// Terrain flood and fire spread.
    Terrain(TickEngine<TerrainRule>),
    /// Game of Life in any mode.
    Life(TickEngine<LifeRule>),
    /// Rule-table-driven 1D automaton.
    Rule1d(TickEngine<ElementaryRule>),
}

impl World {
    /// Validate `config`, lay out `seed_data`, and build the engine.
    pub fn initialize(config: &AutomatonConfig, seed_data: SeedData) -> Result<Self, ConfigError> {
        config.validate()?;
        let space = config.build_space()?;
        let mismatch = || ConfigError::SeedDataMismatch {
            reason: format!(
                "{} seed data given for {}",
                seed_data.kind_name(),
                config.variant.kind()
            ),
        };

        let world = match (&config.variant, &seed_data) {
            (
                Variant::Terrain { rain_intensity },
                SeedData::Terrain {
                    height_map,
                    ignition,
                },
            ) => {
                let rule = TerrainRule::new(*rain_intensity)
                    .map_err(|reason| ConfigError::InvalidParameter { reason })?;
                let (grid, aux) = terrain_initial(config.dims, height_map, ignition, config.seed)?;
                Self::Terrain(TickEngine::new(EngineConfig {
                    rule,
                    space,
                    grid,
                    aux: Some(aux),
                    schedule: config.interventions.clone(),
                    seed: config.seed,
                    ticks: config.ticks,
                })?)
            }
            (variant, SeedData::Life(pattern))
                if matches!(
                    variant,
                    Variant::LifeStandard | Variant::LifeVirus { .. } | Variant::LifeBattle
                ) =>
            {
                let rule = match *variant {
                    Variant::LifeVirus {
                        infection_probability,
                    } => LifeRule::virus(infection_probability)
                        .map_err(|reason| ConfigError::InvalidParameter { reason })?,
                    Variant::LifeBattle => LifeRule::Battle,
                    _ => LifeRule::Standard,
                };
                let grid = pattern.grid(config.dims, config.seed)?;
                Self::Life(TickEngine::new(EngineConfig {
                    rule,
                    space,
                    grid,
                    aux: None,
                    schedule: Vec::new(),
                    seed: config.seed,
                    ticks: config.ticks,
                })?)
            }
            (Variant::Rule1d { rule_seed }, SeedData::Row(row)) => {
                let rule = AutomatonConfig::elementary_rule(*rule_seed)?;
                let grid = row.grid(config.dims.cols(), config.seed)?;
                Self::Rule1d(TickEngine::new(EngineConfig {
                    rule,
                    space,
                    grid,
                    aux: None,
                    schedule: Vec::new(),
                    seed: config.seed,
                    ticks: config.ticks,
                })?)
            }
            _ => return Err(mismatch()),
        };

        log::info!(
            "initialized {} on {:?} ({} boundary, {} ticks, seed {}, {} interventions)",
            config.variant.kind(),
            config.dims,
            config.boundary,
            config.ticks,
            config.seed,
            config.interventions.len()
        );
        Ok(world)
    }

    /// Advance one tick.
    pub fn step(&mut self) -> Result<StepReport, StepError> {
        match self {
            Self::Terrain(e) => e.step(),
            Self::Life(e) => e.step(),
            Self::Rule1d(e) => e.step(),
        }
    }

    /// Step until the budget is spent.
    pub fn run(&mut self) -> Result<Vec<StepReport>, StepError> {
        match self {
            Self::Terrain(e) => e.run(),
            Self::Life(e) => e.run(),
            Self::Rule1d(e) => e.run(),
        }
    }

    /// Return to tick 0.
    pub fn reset(&mut self) {
        match self {
            Self::Terrain(e) => e.reset(),
            Self::Life(e) => e.reset(),
            Self::Rule1d(e) => e.reset(),
        }
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> TickId {
        match self {
            Self::Terrain(e) => e.current_tick(),
            Self::Life(e) => e.current_tick(),
            Self::Rule1d(e) => e.current_tick(),
        }
    }

    /// Whether the tick budget is spent.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Terrain(e) => e.is_complete(),
            Self::Life(e) => e.is_complete(),
            Self::Rule1d(e) => e.is_complete(),
        }
    }

    /// Number of snapshots recorded, including tick 0.
    pub fn history_len(&self) -> usize {
        match self {
            Self::Terrain(e) => e.history().len(),
            Self::Life(e) => e.history().len(),
            Self::Rule1d(e) => e.history().len(),
        }
    }

    /// Name of the active rule.
    pub fn rule_name(&self) -> &str {
        match self {
            Self::Terrain(e) => e.rule().name(),
            Self::Life(e) => e.rule().name(),
            Self::Rule1d(e) => e.rule().name(),
        }
    }

    /// The terrain engine, if this is a terrain run.
    pub fn as_terrain(&self) -> Option<&TickEngine<TerrainRule>> {
        match self {
            Self::Terrain(e) => Some(e),
            _ => None,
        }
    }

    /// Mutable terrain engine.
    pub fn as_terrain_mut(&mut self) -> Option<&mut TickEngine<TerrainRule>> {
        match self {
            Self::Terrain(e) => Some(e),
            _ => None,
        }
    }

    /// The life engine, if this is a Game-of-Life run.
    pub fn as_life(&self) -> Option<&TickEngine<LifeRule>> {
        match self {
            Self::Life(e) => Some(e),
            _ => None,
        }
    }

    /// Mutable life engine.
    pub fn as_life_mut(&mut self) -> Option<&mut TickEngine<LifeRule>> {
        match self {
            Self::Life(e) => Some(e),
            _ => None,
        }
    }

    /// The 1D engine, if this is a rule-table run.
    pub fn as_rule1d(&self) -> Option<&TickEngine<ElementaryRule>> {
        match self {
            Self::Rule1d(e) => Some(e),
            _ => None,
        }
    }

    /// Mutable 1D engine.
    pub fn as_rule1d_mut(&mut self) -> Option<&mut TickEngine<ElementaryRule>> {
        match self {
            Self::Rule1d(e) => Some(e),
            _ => None,
        }
    }

    /// State codes of every snapshot, in tick order.
    pub fn history_codes(&self) -> Vec<Vec<u8>> {
        match self {
            Self::Terrain(e) => e.history().grids().map(|g| g.codes()).collect(),
            Self::Life(e) => e.history().grids().map(|g| g.codes()).collect(),
            Self::Rule1d(e) => e.history().grids().map(|g| g.codes()).collect(),
        }
    }
}
