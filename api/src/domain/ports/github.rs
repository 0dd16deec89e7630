//! GitHub client port trait
//!
//! Defines the interface for the GitHub REST API calls an analysis needs.

use async_trait::async_trait;

use crate::domain::entities::{
    Contributor, RateLimitStatus, RepositoryId, RepositoryMetadata, WeeklyCommitSample,
};
use crate::error::{ApiFailure, ErrorKind};

/// Result of a single GitHub API call.
///
/// Exactly one of a payload, an empty "still computing" signal, or a
/// classified failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    /// 202 Accepted - GitHub is computing the response in the background
    Empty,
    Failure(ApiFailure),
}

impl<T> ApiOutcome<T> {
    pub fn failure(kind: ErrorKind, detail: impl Into<String>) -> Self {
        ApiOutcome::Failure(ApiFailure::new(kind, detail))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(value) => ApiOutcome::Success(f(value)),
            ApiOutcome::Empty => ApiOutcome::Empty,
            ApiOutcome::Failure(failure) => ApiOutcome::Failure(failure),
        }
    }

    /// Collapse into a `Result`, substituting `on_empty` for a 202
    pub fn into_result(self, on_empty: impl FnOnce() -> T) -> Result<T, ApiFailure> {
        match self {
            ApiOutcome::Success(value) => Ok(value),
            ApiOutcome::Empty => Ok(on_empty()),
            ApiOutcome::Failure(failure) => Err(failure),
        }
    }
}

/// Port trait for GitHub API operations
///
/// Transport-level errors (timeouts, refused connections) are reported as
/// `ApiOutcome::Failure` with [`ErrorKind::NetworkError`].
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// `GET /repos/{owner}/{repo}`
    async fn get_repository(&self, repo: &RepositoryId) -> ApiOutcome<RepositoryMetadata>;

    /// `GET /repos/{owner}/{repo}/contributors?per_page={per_page}`
    async fn list_contributors(
        &self,
        repo: &RepositoryId,
        per_page: u32,
    ) -> ApiOutcome<Vec<Contributor>>;

    /// `GET /repos/{owner}/{repo}/stats/commit_activity`
    ///
    /// A computing statistic may come back as `Empty` or as an empty list.
    async fn get_commit_activity(
        &self,
        repo: &RepositoryId,
    ) -> ApiOutcome<Vec<WeeklyCommitSample>>;

    /// `GET /rate_limit`, core resource
    async fn get_rate_limit(&self) -> ApiOutcome<RateLimitStatus>;
}
