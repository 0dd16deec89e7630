//! Repository analyzer
//!
//! Orchestrates the GitHub calls behind one analysis. Only an invalid URL or a
//! failed metadata fetch is fatal; every later sub-fetch degrades to an empty
//! value plus a warning so the caller still sees what did succeed.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::{aggregate, CommitActivityPoller, PollPolicy};
use crate::domain::entities::{
    AnalysisResult, CommitMetrics, Contributor, RateLimitStatus, RepositoryId,
    WeeklyCommitSample, CONTRIBUTORS_PER_PAGE,
};
use crate::domain::ports::{ApiOutcome, GitHubClient};
use crate::error::{AnalysisError, ApiFailure, ErrorKind};

/// Service producing [`AnalysisResult`]s from repository URLs
pub struct RepositoryAnalyzer<GC>
where
    GC: GitHubClient,
{
    github: Arc<GC>,
    poller: CommitActivityPoller<GC>,
}

impl<GC> RepositoryAnalyzer<GC>
where
    GC: GitHubClient,
{
    pub fn new(github: Arc<GC>, poll_policy: PollPolicy) -> Self {
        Self {
            poller: CommitActivityPoller::new(github.clone(), poll_policy),
            github,
        }
    }

    /// Analyze the repository a GitHub URL points at, stopping the commit
    /// activity poll once `cancel` fires.
    pub async fn analyze(
        &self,
        raw_url: &str,
        cancel: &CancellationToken,
    ) -> Result<AnalysisResult, AnalysisError> {
        let repo = RepositoryId::parse_url(raw_url)?;
        self.analyze_repository(repo, cancel).await
    }

    /// Analyze an already identified repository
    pub async fn analyze_repository(
        &self,
        repo: RepositoryId,
        cancel: &CancellationToken,
    ) -> Result<AnalysisResult, AnalysisError> {
        tracing::info!("Analyzing repository {}", repo);

        let mut repository = match self.github.get_repository(&repo).await {
            ApiOutcome::Success(metadata) => metadata,
            ApiOutcome::Empty => {
                return Err(ApiFailure::new(
                    ErrorKind::ApiError,
                    "GitHub returned no repository metadata. Please try again.",
                )
                .into())
            }
            ApiOutcome::Failure(failure) => {
                tracing::warn!("Metadata fetch for {} failed: {}", repo, failure);
                return Err(failure.into());
            }
        };
        repository.humanize_dates();

        let (contributors, commit_activity, rate_limit) = tokio::join!(
            self.github.list_contributors(&repo, CONTRIBUTORS_PER_PAGE),
            self.poller.fetch_commit_activity(&repo, cancel),
            self.github.get_rate_limit(),
        );

        let (contributors, contributor_warning) = contributors_or_warning(&repo, contributors);
        let (commit_metrics, commit_warning) = metrics_or_warning(&repo, commit_activity);
        let rate_limit = match rate_limit {
            ApiOutcome::Success(status) => status,
            _ => RateLimitStatus::Unknown,
        };
        if let RateLimitStatus::Known {
            remaining, limit, ..
        } = &rate_limit
        {
            tracing::debug!(
                "GitHub quota: {}/{} remaining, resets at {}",
                remaining,
                limit,
                rate_limit.reset_time()
            );
        }

        let result = AnalysisResult {
            repository_id: repo,
            repository,
            contributors,
            contributor_warning,
            commit_metrics,
            commit_warning,
            rate_limit,
        };

        tracing::info!(
            "Analysis of {} finished: {} contributors, {} commits, {} warning(s)",
            result.repository_id,
            result.contributors.len(),
            result.commit_metrics.total_commits,
            result.warnings().count()
        );

        Ok(result)
    }
}

fn contributors_or_warning(
    repo: &RepositoryId,
    outcome: ApiOutcome<Vec<Contributor>>,
) -> (Vec<Contributor>, Option<String>) {
    match outcome.into_result(Vec::new) {
        Ok(contributors) => (contributors, None),
        Err(failure) => {
            tracing::warn!("Contributors fetch for {} failed: {}", repo, failure);
            (Vec::new(), Some(failure.detail))
        }
    }
}

fn metrics_or_warning(
    repo: &RepositoryId,
    outcome: ApiOutcome<Vec<WeeklyCommitSample>>,
) -> (CommitMetrics, Option<String>) {
    match outcome.into_result(Vec::new) {
        Ok(weeks) => (aggregate(&weeks), None),
        Err(failure) => {
            tracing::warn!("Commit activity for {} unavailable: {}", repo, failure);
            (CommitMetrics::default(), Some(failure.detail))
        }
    }
}
