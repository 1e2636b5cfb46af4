//! Tick engine: the single-threaded stepping loop.
//!
//! [`TickEngine`] owns one rule, its lattice, the live grid and auxiliary
//! fields, the intervention schedule, and the snapshot history. Each
//! [`step()`](TickEngine::step) applies the interventions scheduled for
//! the tick, sweeps the rule, and appends the result to the history.
//!
//! A tick is atomic: interventions and the sweep work on staged copies,
//! and nothing is committed unless both succeed.

use std::time::Instant;

use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tessera_core::{AuxFields, Coord, Grid, GridError, StepError, TickId};
use tessera_rule::{Intervention, Rule, SweepContext};
use tessera_rules::ScheduledIntervention;
use tessera_space::Space;

use crate::config::ConfigError;
use crate::history::History;
use crate::metrics::StepMetrics;

// ── EngineConfig ───────────────────────────────────────────────────

/// Everything a [`TickEngine`] is built from.
pub struct EngineConfig<R: Rule> {
    /// Transition rule.
    pub rule: R,
    /// Lattice the grid lives on.
    pub space: Box<dyn Space>,
    /// Initial grid, recorded as tick 0.
    pub grid: Grid<R::State>,
    /// Initial auxiliary fields. Required exactly when the rule uses them.
    pub aux: Option<AuxFields>,
    /// Interventions, applied before the sweep of their tick.
    pub schedule: Vec<ScheduledIntervention<R::Intervention>>,
    /// Seed for the per-tick generators.
    pub seed: u64,
    /// Tick budget.
    pub ticks: u64,
}

// ── StepReport ─────────────────────────────────────────────────────

/// Result of a successful tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// The tick just completed; equals the new history entry's tick.
    pub tick: TickId,
    /// Cells changed by the sweep.
    pub changes: usize,
    /// Interventions applied before the sweep.
    pub interventions: usize,
    /// Cells touched by those interventions.
    pub cells_touched: usize,
    /// Timings for this tick.
    pub metrics: StepMetrics,
}

// ── TickEngine ─────────────────────────────────────────────────────

/// Single-threaded automaton stepper with history recording.
pub struct TickEngine<R: Rule> {
    rule: R,
    space: Box<dyn Space>,
    grid: Grid<R::State>,
    staged: Grid<R::State>,
    next: Grid<R::State>,
    aux: Option<AuxFields>,
    aux_staged: Option<AuxFields>,
    initial_aux: Option<AuxFields>,
    schedule: IndexMap<TickId, Vec<R::Intervention>>,
    seed: u64,
    ticks: u64,
    current_tick: TickId,
    history: History<R::State>,
    last_metrics: StepMetrics,
}

// Compile-time assertion: TickEngine must be Send so a driver can move
// it to a worker thread.
const _: () = {
    fn _assert_send<T: Send>() {}
    fn _check() {
        _assert_send::<TickEngine<tessera_rules::TerrainRule>>();
        _assert_send::<TickEngine<tessera_rules::LifeRule>>();
        _assert_send::<TickEngine<tessera_rules::ElementaryRule>>();
    }
};

impl<R: Rule> TickEngine<R> {
    /// Build an engine, checking that its parts agree with each other.
    pub fn new(config: EngineConfig<R>) -> Result<Self, ConfigError> {
        let EngineConfig {
            rule,
            space,
            grid,
            aux,
            schedule,
            seed,
            ticks,
        } = config;

        if ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        if space.cell_count() == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if grid.dims() != space.dims() {
            return Err(ConfigError::SeedDataMismatch {
                reason: format!(
                    "grid is {:?} but the space is {:?}",
                    grid.dims(),
                    space.dims()
                ),
            });
        }
        match (&aux, rule.uses_aux()) {
            (None, true) => {
                return Err(ConfigError::SeedDataMismatch {
                    reason: format!("rule '{}' needs auxiliary fields", rule.name()),
                });
            }
            (Some(_), false) => {
                return Err(ConfigError::SeedDataMismatch {
                    reason: format!("rule '{}' takes no auxiliary fields", rule.name()),
                });
            }
            (Some(fields), true) if fields.len() != grid.len() => {
                return Err(ConfigError::SeedDataMismatch {
                    reason: format!(
                        "auxiliary fields cover {} cells, grid has {}",
                        fields.len(),
                        grid.len()
                    ),
                });
            }
            _ => {}
        }

        let mut by_tick: IndexMap<TickId, Vec<R::Intervention>> = IndexMap::new();
        for scheduled in schedule {
            if scheduled.tick.0 >= ticks {
                return Err(ConfigError::InvalidParameter {
                    reason: format!(
                        "intervention at tick {} never runs in a {ticks}-tick run",
                        scheduled.tick
                    ),
                });
            }
            by_tick
                .entry(scheduled.tick)
                .or_default()
                .push(scheduled.intervention);
        }

        Ok(Self {
            rule,
            space,
            staged: grid.clone(),
            next: grid.clone(),
            history: History::new(&grid),
            grid,
            aux_staged: aux.clone(),
            initial_aux: aux.clone(),
            aux,
            schedule: by_tick,
            seed,
            ticks,
            current_tick: TickId(0),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance one tick.
    ///
    /// For tick `k`: apply the interventions scheduled for `k`, seed the
    /// tick generator with `seed ^ k`, sweep, commit, and record the new
    /// grid as tick `k + 1`.
    ///
    /// # Errors
    ///
    /// [`StepError::RunComplete`] once the budget is spent, and
    /// [`StepError::Rule`] if an intervention or the sweep fails. Either
    /// way the engine is left exactly as it was.
    pub fn step(&mut self) -> Result<StepReport, StepError> {
        let tick_start = Instant::now();

        if self.is_complete() {
            return Err(StepError::RunComplete { ticks: self.ticks });
        }
        let tick = self.current_tick;

        // 1. Stage the committed state.
        self.staged.cells_mut().copy_from_slice(self.grid.cells());
        self.aux_staged.clone_from(&self.aux);

        // 2. Interventions.
        let intervention_start = Instant::now();
        let mut interventions = 0;
        let mut cells_touched = 0;
        if let Some(scheduled) = self.schedule.get(&tick) {
            for intervention in scheduled {
                log::info!(
                    "tick {tick}: applying {} to {}",
                    intervention.name(),
                    self.rule.name()
                );
                let cells = self
                    .rule
                    .intervene(
                        intervention,
                        self.space.as_ref(),
                        &mut self.staged,
                        self.aux_staged.as_mut(),
                    )
                    .map_err(|reason| StepError::Rule { tick, reason })?;
                log::trace!("tick {tick}: {} touched {cells} cells", intervention.name());
                interventions += 1;
                cells_touched += cells;
            }
        }
        let intervention_us = intervention_start.elapsed().as_micros() as u64;

        // 3. Sweep.
        let sweep_start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ tick.0);
        self.next.cells_mut().copy_from_slice(self.staged.cells());
        let stats = {
            let mut ctx = SweepContext::new(
                self.space.as_ref(),
                &self.staged,
                &mut self.next,
                self.aux_staged.as_mut(),
                tick,
                &mut rng,
            );
            self.rule
                .sweep(&mut ctx)
                .map_err(|reason| StepError::Rule { tick, reason })?
        };
        let sweep_us = sweep_start.elapsed().as_micros() as u64;

        // 4. Commit and record.
        let snapshot_start = Instant::now();
        std::mem::swap(&mut self.grid, &mut self.next);
        std::mem::swap(&mut self.aux, &mut self.aux_staged);
        self.current_tick = tick.next();
        self.history.push(self.current_tick, &self.grid);
        let snapshot_us = snapshot_start.elapsed().as_micros() as u64;

        let metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            intervention_us,
            sweep_us,
            snapshot_us,
            changes: stats.changes,
        };
        log::debug!(
            "{} tick {}: {} changes, {} us",
            self.rule.name(),
            self.current_tick,
            stats.changes,
            metrics.total_us
        );
        self.last_metrics = metrics.clone();

        Ok(StepReport {
            tick: self.current_tick,
            changes: stats.changes,
            interventions,
            cells_touched,
            metrics,
        })
    }

    /// Step until the budget is spent, returning one report per tick.
    pub fn run(&mut self) -> Result<Vec<StepReport>, StepError> {
        let remaining = self.ticks.saturating_sub(self.current_tick.0);
        let mut reports = Vec::with_capacity(remaining as usize);
        while !self.is_complete() {
            reports.push(self.step()?);
        }
        Ok(reports)
    }

    /// Overwrite one cell of the live grid between ticks.
    ///
    /// The history is not touched; the edit shows up in the next
    /// snapshot. Returns the previous state.
    pub fn set_cell(&mut self, coord: &Coord, state: R::State) -> Result<R::State, GridError> {
        self.grid.set_at(coord, state)
    }

    /// Return to tick 0 with the initial grid and fields.
    pub fn reset(&mut self) {
        if let Some(initial) = self.history.get(0) {
            self.grid.cells_mut().copy_from_slice(initial.grid().cells());
        }
        self.aux.clone_from(&self.initial_aux);
        self.history.truncate_to_initial();
        self.current_tick = TickId(0);
        self.last_metrics = StepMetrics::default();
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid<R::State> {
        &self.grid
    }

    /// The live auxiliary fields, if the rule uses any.
    pub fn aux(&self) -> Option<&AuxFields> {
        self.aux.as_ref()
    }

    /// All snapshots so far, starting with tick 0.
    pub fn history(&self) -> &History<R::State> {
        &self.history
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// The tick budget.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether the tick budget is spent.
    pub fn is_complete(&self) -> bool {
        self.current_tick.0 >= self.ticks
    }

    /// The rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The lattice.
    pub fn space(&self) -> &dyn Space {
        self.space.as_ref()
    }

    /// The run seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}
