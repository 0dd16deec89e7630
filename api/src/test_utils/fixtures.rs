//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::DateTime;

use crate::domain::entities::repository::{RepositoryLicense, RepositoryOwner};
use crate::domain::entities::{
    Contributor, RateLimitStatus, RepositoryMetadata, WeeklyCommitSample,
};

/// Sunday 2024-01-07 00:00:00 UTC
pub const FIRST_WEEK: i64 = 1_704_585_600;
pub const WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// Create repository metadata with raw GitHub timestamps
pub fn test_metadata(owner: &str, name: &str) -> RepositoryMetadata {
    RepositoryMetadata {
        name: name.to_string(),
        full_name: format!("{}/{}", owner, name),
        description: Some("A test repository".to_string()),
        html_url: format!("https://github.com/{}/{}", owner, name),
        homepage: None,
        language: Some("Rust".to_string()),
        topics: vec!["testing".to_string()],
        stargazers_count: 120,
        watchers_count: 120,
        forks_count: 8,
        open_issues_count: 3,
        size: 2048,
        default_branch: Some("main".to_string()),
        license: Some(RepositoryLicense {
            name: "MIT License".to_string(),
            spdx_id: Some("MIT".to_string()),
        }),
        owner: RepositoryOwner {
            login: owner.to_string(),
            avatar_url: None,
            html_url: Some(format!("https://github.com/{}", owner)),
        },
        fork: false,
        archived: false,
        created_at: Some("2024-01-05T10:00:00Z".to_string()),
        updated_at: Some("2024-06-01T12:30:00Z".to_string()),
        pushed_at: Some("2024-06-02T08:15:00Z".to_string()),
    }
}

/// Create a contributor with a contribution count
pub fn test_contributor(login: &str, contributions: u64) -> Contributor {
    Contributor {
        login: login.to_string(),
        avatar_url: Some(format!("https://avatars.example.com/{}", login)),
        html_url: Some(format!("https://github.com/{}", login)),
        contributions,
    }
}

/// Create consecutive weekly samples, one per total, all commits on Monday
pub fn test_weeks(totals: &[u64]) -> Vec<WeeklyCommitSample> {
    totals
        .iter()
        .enumerate()
        .map(|(i, &total)| WeeklyCommitSample {
            week_start: FIRST_WEEK + i as i64 * WEEK_SECS,
            total_commits: total,
            daily_breakdown: [0, total, 0, 0, 0, 0, 0],
        })
        .collect()
}

/// Create a known rate limit snapshot out of 5000
pub fn test_rate_limit(remaining: u64) -> RateLimitStatus {
    RateLimitStatus::Known {
        remaining,
        limit: 5000,
        reset_at: DateTime::from_timestamp(FIRST_WEEK + 3600, 0).unwrap(),
    }
}
