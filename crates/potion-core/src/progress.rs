use serde::{Deserialize, Serialize};

/// Percentage of levels completed, clamped to `0.0..=100.0`.
pub fn progress_percent(completed: usize, max_levels: usize) -> f64 {
    if max_levels == 0 {
        return 0.0;
    }
    let ratio = completed.min(max_levels) as f64 / max_levels as f64;
    ratio * 100.0
}

/// Snapshot for progress bars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percent: progress_percent(completed, total),
        }
    }
}
