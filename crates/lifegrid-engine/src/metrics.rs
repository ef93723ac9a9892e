//! Per-generation metrics for a [`LockstepLife`](crate::LockstepLife) session.

/// Timing and population data collected during a single generation.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole generation, in microseconds.
    pub total_us: u64,
    /// Dead cells that came alive this generation.
    pub births: usize,
    /// Alive cells that died this generation.
    pub deaths: usize,
    /// Alive cells after the generation.
    pub alive: usize,
}
