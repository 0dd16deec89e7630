//! Rate limit snapshot

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Core API quota at the time of the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RateLimitStatus {
    Known {
        remaining: u64,
        limit: u64,
        reset_at: DateTime<Utc>,
    },
    /// The rate limit endpoint could not be read
    Unknown,
}

impl RateLimitStatus {
    /// Reset time as `HH:MM:SS`, or `Unknown`
    pub fn reset_time(&self) -> String {
        match self {
            RateLimitStatus::Known { reset_at, .. } => reset_at.format("%H:%M:%S").to_string(),
            RateLimitStatus::Unknown => "Unknown".to_string(),
        }
    }
}
