//! Commit metrics aggregation

use crate::domain::entities::{CommitMetrics, WeeklyCommitSample, RECENT_WEEKS};

/// Fold weekly samples into summary metrics.
///
/// Weeks without commits are left out of the average. `recent_weeks` keeps
/// the last [`RECENT_WEEKS`] samples in input order, which GitHub returns
/// oldest first.
pub fn aggregate(samples: &[WeeklyCommitSample]) -> CommitMetrics {
    let total_commits = samples.iter().map(|w| w.total_commits).sum();

    let (active_total, active_weeks) = samples
        .iter()
        .filter(|w| w.total_commits > 0)
        .fold((0u64, 0u64), |(sum, count), w| (sum + w.total_commits, count + 1));

    let weekly_average = if active_weeks == 0 {
        0.0
    } else {
        round2(active_total as f64 / active_weeks as f64)
    };

    let recent_start = samples.len().saturating_sub(RECENT_WEEKS);

    CommitMetrics {
        total_commits,
        weekly_average,
        recent_weeks: samples[recent_start..].to_vec(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
