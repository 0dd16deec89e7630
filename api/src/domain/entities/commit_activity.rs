//! Commit activity entities
//!
//! Weekly samples as reported by the statistics endpoint, and the summary
//! derived from them.

use serde::{Deserialize, Serialize};

/// Number of trailing weeks kept in [`CommitMetrics::recent_weeks`]
pub const RECENT_WEEKS: usize = 4;

/// One week of commit activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCommitSample {
    /// Start of the week (Sunday), unix seconds
    #[serde(rename = "week")]
    pub week_start: i64,
    #[serde(rename = "total")]
    pub total_commits: u64,
    /// Commits per day, Sunday first
    #[serde(rename = "days")]
    pub daily_breakdown: [u64; 7],
}

/// Summary statistics derived from weekly samples
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommitMetrics {
    pub total_commits: u64,
    /// Mean over weeks with at least one commit, rounded to 2 decimals
    pub weekly_average: f64,
    pub recent_weeks: Vec<WeeklyCommitSample>,
}
