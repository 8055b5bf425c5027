//! Simulation configuration.

use crate::constants::REFERENCE_FRAME_MS;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum ticks per run before the run is cut off
    pub max_ticks_per_run: u64,

    /// Simulated frame time fed to each tick, in milliseconds
    pub frame_ms: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_ticks_per_run: 100_000,
            frame_ms: REFERENCE_FRAME_MS,
            verbosity: 1,
        }
    }
}
