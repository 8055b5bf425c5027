//! Aggregated statistics for a simulation batch.

/// Outcome of a single simulated run.
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Pipes passed before the run ended.
    pub score: u32,
    /// Ticks survived (capped at the per-run limit).
    pub ticks: u64,
    /// True if the run hit the tick cap instead of crashing.
    pub timed_out: bool,
}

/// Aggregate report over all runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub runs: usize,
    pub min_score: u32,
    pub max_score: u32,
    pub mean_score: f64,
    pub mean_ticks: f64,
    pub timeouts: usize,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        if runs.is_empty() {
            return Self {
                runs: 0,
                min_score: 0,
                max_score: 0,
                mean_score: 0.0,
                mean_ticks: 0.0,
                timeouts: 0,
            };
        }
        let count = runs.len();
        let min_score = runs.iter().map(|r| r.score).min().unwrap_or(0);
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let total_score: u64 = runs.iter().map(|r| r.score as u64).sum();
        let total_ticks: u64 = runs.iter().map(|r| r.ticks).sum();
        let timeouts = runs.iter().filter(|r| r.timed_out).count();
        Self {
            runs: count,
            min_score,
            max_score,
            mean_score: total_score as f64 / count as f64,
            mean_ticks: total_ticks as f64 / count as f64,
            timeouts,
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "Results over {} runs:\n\
             \x20 Score:     min {}  mean {:.2}  max {}\n\
             \x20 Survival:  mean {:.0} ticks\n\
             \x20 Timeouts:  {}",
            self.runs, self.min_score, self.mean_score, self.max_score, self.mean_ticks,
            self.timeouts
        )
    }
}
