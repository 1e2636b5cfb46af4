//! Per-tick timing metrics.
//!
//! [`StepMetrics`] is filled in by every successful
//! [`TickEngine::step()`](crate::TickEngine::step) and kept as the
//! engine's most recent metrics.

/// Timing data collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent applying scheduled interventions.
    pub intervention_us: u64,
    /// Time spent in the rule's sweep.
    pub sweep_us: u64,
    /// Time spent committing the tick and appending its snapshot.
    pub snapshot_us: u64,
    /// Cells changed by the sweep, as reported by the rule.
    pub changes: usize,
}
