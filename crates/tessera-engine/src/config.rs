//! Automaton configuration, validation, and error types.
//!
//! [`AutomatonConfig`] is the input for [`World::initialize`](crate::World::initialize).
//! [`validate()`](AutomatonConfig::validate) checks every structural
//! invariant up front, so nothing configuration-related can fail once a
//! run has started.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use tessera_core::{Coord, Dims, TickId};
use tessera_rules::{
    ElementaryRule, LifeRule, RuleTable, ScheduledIntervention, TerrainRule,
    DEFAULT_INFECTION_PROBABILITY, DEFAULT_RAIN_INTENSITY,
};
use tessera_space::{BoundaryPolicy, Line1D, Space, SpaceError, Square8};

/// Tick budget used when none is configured.
pub const DEFAULT_TICKS: u64 = 20;

/// Rule seed used when none is configured.
pub const DEFAULT_RULE_SEED: i64 = 414_420;

// ── VariantKind ────────────────────────────────────────────────────

/// The automaton family, without parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// Terrain flood and fire spread.
    Terrain,
    /// Conway's Game of Life.
    LifeStandard,
    /// Game of Life with one-tick infections.
    LifeVirus,
    /// Game of Life with two factions.
    LifeBattle,
    /// Rule-table-driven 1D automaton.
    Rule1d,
}

impl VariantKind {
    /// Every variant, in declaration order.
    pub const ALL: [VariantKind; 5] = [
        Self::Terrain,
        Self::LifeStandard,
        Self::LifeVirus,
        Self::LifeBattle,
        Self::Rule1d,
    ];

    /// Configuration name of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terrain => "terrain",
            Self::LifeStandard => "life-standard",
            Self::LifeVirus => "life-virus",
            Self::LifeBattle => "life-battle",
            Self::Rule1d => "rule1d",
        }
    }

    /// Number of lattice dimensions the variant runs on.
    pub fn ndim(self) -> usize {
        match self {
            Self::Rule1d => 1,
            _ => 2,
        }
    }

    /// The variant with its default parameters.
    pub fn with_defaults(self) -> Variant {
        match self {
            Self::Terrain => Variant::Terrain {
                rain_intensity: DEFAULT_RAIN_INTENSITY,
            },
            Self::LifeStandard => Variant::LifeStandard,
            Self::LifeVirus => Variant::LifeVirus {
                infection_probability: DEFAULT_INFECTION_PROBABILITY,
            },
            Self::LifeBattle => Variant::LifeBattle,
            Self::Rule1d => Variant::Rule1d {
                rule_seed: DEFAULT_RULE_SEED,
            },
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == name)
            .ok_or(ConfigError::InvalidVariant {
                name: s.to_string(),
            })
    }
}

// ── Variant ────────────────────────────────────────────────────────

/// The automaton family together with its parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    /// Terrain flood and fire spread.
    Terrain {
        /// Water added to every cell per tick.
        rain_intensity: f32,
    },
    /// Conway's Game of Life.
    LifeStandard,
    /// Game of Life with one-tick infections.
    LifeVirus {
        /// Chance that a birth is infected.
        infection_probability: f64,
    },
    /// Game of Life with two factions.
    LifeBattle,
    /// Rule-table-driven 1D automaton.
    Rule1d {
        /// Decimal seed the rule table is derived from.
        rule_seed: i64,
    },
}

impl Variant {
    /// The parameterless kind.
    pub fn kind(&self) -> VariantKind {
        match self {
            Self::Terrain { .. } => VariantKind::Terrain,
            Self::LifeStandard => VariantKind::LifeStandard,
            Self::LifeVirus { .. } => VariantKind::LifeVirus,
            Self::LifeBattle => VariantKind::LifeBattle,
            Self::Rule1d { .. } => VariantKind::Rule1d,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration or its seed data.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Boundary policy name not recognised.
    InvalidBoundary {
        /// The name that was supplied.
        name: String,
    },
    /// Variant name not recognised.
    InvalidVariant {
        /// The name that was supplied.
        name: String,
    },
    /// Pattern name not recognised.
    InvalidPattern {
        /// The name that was supplied.
        name: String,
    },
    /// The grid has zero cells.
    EmptyGrid,
    /// The tick budget is zero.
    ZeroTicks,
    /// The rule seed cannot be turned into a rule table.
    InvalidSeed {
        /// Description of the problem.
        reason: String,
    },
    /// The grid's dimensionality does not suit the variant.
    DimensionMismatch {
        /// The configured variant.
        variant: VariantKind,
        /// Dimensionality the variant needs.
        expected: usize,
        /// Dimensionality that was configured.
        actual: usize,
    },
    /// Seed data does not fit the variant or the grid.
    SeedDataMismatch {
        /// Description of the mismatch.
        reason: String,
    },
    /// A named pattern does not fit inside the grid.
    PatternDoesNotFit {
        /// Pattern name.
        pattern: String,
        /// First cell that falls outside.
        coord: Coord,
        /// The grid dimensions.
        dims: Dims,
    },
    /// A rule parameter is out of range.
    InvalidParameter {
        /// Description of the problem.
        reason: String,
    },
    /// Interventions were scheduled on a variant that has none.
    UnsupportedIntervention {
        /// The configured variant.
        variant: VariantKind,
    },
    /// An intervention targets a cell outside the grid.
    InterventionOutOfBounds {
        /// Tick the intervention is scheduled for.
        tick: TickId,
        /// The offending centre.
        coord: Coord,
    },
    /// Lattice construction failed.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoundary { name } => write!(
                f,
                "invalid boundary policy '{name}' (expected periodic, absorbing or reflective)"
            ),
            Self::InvalidVariant { name } => write!(f, "invalid automaton variant '{name}'"),
            Self::InvalidPattern { name } => write!(f, "invalid pattern '{name}'"),
            Self::EmptyGrid => write!(f, "grid has zero cells"),
            Self::ZeroTicks => write!(f, "tick count must be at least 1"),
            Self::InvalidSeed { reason } => write!(f, "invalid seed: {reason}"),
            Self::DimensionMismatch {
                variant,
                expected,
                actual,
            } => write!(f, "{variant} needs a {expected}D grid, got {actual}D"),
            Self::SeedDataMismatch { reason } => write!(f, "seed data mismatch: {reason}"),
            Self::PatternDoesNotFit {
                pattern,
                coord,
                dims,
            } => write!(f, "pattern '{pattern}' needs cell {coord:?}, outside {dims:?}"),
            Self::InvalidParameter { reason } => write!(f, "invalid parameter: {reason}"),
            Self::UnsupportedIntervention { variant } => {
                write!(f, "{variant} does not support interventions")
            }
            Self::InterventionOutOfBounds { tick, coord } => {
                write!(f, "intervention at tick {tick} targets {coord:?}, outside the grid")
            }
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::UnknownBoundary { name } => Self::InvalidBoundary { name },
            SpaceError::EmptySpace => Self::EmptyGrid,
            other => Self::Space(other),
        }
    }
}

// ── AutomatonConfig ────────────────────────────────────────────────

/// Complete configuration for one automaton run.
///
/// Built with [`new()`](Self::new) plus builder-style setters; passed to
/// [`World::initialize`](crate::World::initialize) together with seed
/// data.
///
/// ```
/// use tessera_core::Dims;
/// use tessera_engine::{AutomatonConfig, VariantKind};
/// use tessera_space::BoundaryPolicy;
///
/// let config = AutomatonConfig::new(VariantKind::LifeVirus.with_defaults(), Dims::Plane { rows: 32, cols: 32 })
///     .boundary("reflective".parse::<BoundaryPolicy>().unwrap())
///     .ticks(15)
///     .seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AutomatonConfig {
    /// Automaton family and parameters.
    pub variant: Variant,
    /// Lattice dimensions.
    pub dims: Dims,
    /// Edge behaviour of neighbour lookups.
    pub boundary: BoundaryPolicy,
    /// Number of ticks in the run.
    pub ticks: u64,
    /// Seed for random initialisation and per-tick draws.
    pub seed: u64,
    /// Scripted interventions (terrain only).
    pub interventions: Vec<ScheduledIntervention>,
}

impl Default for AutomatonConfig {
    /// Standard Game of Life on a 50x50 torus.
    fn default() -> Self {
        Self::new(
            Variant::LifeStandard,
            Dims::Plane {
                rows: 50,
                cols: 50,
            },
        )
    }
}

impl AutomatonConfig {
    /// A configuration with periodic boundaries, [`DEFAULT_TICKS`] ticks,
    /// seed 0 and no interventions.
    pub fn new(variant: Variant, dims: Dims) -> Self {
        Self {
            variant,
            dims,
            boundary: BoundaryPolicy::default(),
            ticks: DEFAULT_TICKS,
            seed: 0,
            interventions: Vec::new(),
        }
    }

    /// Set the boundary policy.
    pub fn boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the tick budget.
    pub fn ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Schedule an intervention.
    pub fn intervention(mut self, scheduled: ScheduledIntervention) -> Self {
        self.interventions.push(scheduled);
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least one cell.
        if self.dims.cell_count() == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        // 2. At least one tick.
        if self.ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        // 3. Dimensionality matches the variant.
        let kind = self.variant.kind();
        if self.dims.ndim() != kind.ndim() {
            return Err(ConfigError::DimensionMismatch {
                variant: kind,
                expected: kind.ndim(),
                actual: self.dims.ndim(),
            });
        }
        // 4. Rule parameters.
        match self.variant {
            Variant::Terrain { rain_intensity } => {
                TerrainRule::new(rain_intensity)
                    .map_err(|reason| ConfigError::InvalidParameter { reason })?;
            }
            Variant::LifeVirus {
                infection_probability,
            } => {
                LifeRule::virus(infection_probability)
                    .map_err(|reason| ConfigError::InvalidParameter { reason })?;
            }
            Variant::Rule1d { rule_seed } => {
                Self::elementary_rule(rule_seed)?;
            }
            Variant::LifeStandard | Variant::LifeBattle => {}
        }
        // 5. The lattice can be built.
        let space = self.build_space()?;
        // 6. Interventions: terrain only, in range, inside the run.
        if !self.interventions.is_empty() && kind != VariantKind::Terrain {
            return Err(ConfigError::UnsupportedIntervention { variant: kind });
        }
        for scheduled in &self.interventions {
            let center = scheduled.intervention.center();
            if space.canonical_rank(center).is_none() {
                return Err(ConfigError::InterventionOutOfBounds {
                    tick: scheduled.tick,
                    coord: center.clone(),
                });
            }
            if scheduled.tick.0 >= self.ticks {
                return Err(ConfigError::InvalidParameter {
                    reason: format!(
                        "intervention at tick {} never runs in a {}-tick run",
                        scheduled.tick, self.ticks
                    ),
                });
            }
        }
        Ok(())
    }

    /// Build the lattice for the configured dimensions and policy.
    pub fn build_space(&self) -> Result<Box<dyn Space>, ConfigError> {
        Ok(match self.dims {
            Dims::Line { len } => Box::new(Line1D::new(len, self.boundary)?),
            Dims::Plane { rows, cols } => Box::new(Square8::new(rows, cols, self.boundary)?),
        })
    }

    /// The rule table for a [`Variant::Rule1d`] configuration.
    pub(crate) fn elementary_rule(rule_seed: i64) -> Result<ElementaryRule, ConfigError> {
        let seed = u64::try_from(rule_seed).map_err(|_| ConfigError::InvalidSeed {
            reason: format!("rule seed must be non-negative, got {rule_seed}"),
        })?;
        let table =
            RuleTable::from_seed(seed).map_err(|reason| ConfigError::InvalidSeed { reason })?;
        Ok(ElementaryRule::new(table))
    }
}
