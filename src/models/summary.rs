use serde::{Deserialize, Serialize};
use std::fmt;

/// Bookkeeping for one engine run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Passes started, including the successful one
    pub attempts: u64,
    /// Passes abandoned because a giver had nobody admissible left
    pub stalled: u64,
    /// Complete passes thrown away by the validator
    pub rejected: u64,
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attempts ({} stalled, {} rejected)",
            self.attempts, self.stalled, self.rejected
        )
    }
}

/// Run summary written next to the assignments
///
/// Carries counts only. The pairs themselves stay in the assignments file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawSummary {
    pub participants: usize,
    pub assignments: usize,
    pub stats: RunStats,
    pub notified: usize,
    pub seed: Option<u64>,
    pub drawn_at: chrono::DateTime<chrono::Utc>,
}
