//! Commit activity poller
//!
//! GitHub computes `/stats/commit_activity` in the background and answers
//! 202 until the statistic is ready. The poller re-issues the request with a
//! linearly growing wait until it gets data, a decisive failure, or runs out
//! of attempts.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::domain::entities::{RepositoryId, WeeklyCommitSample};
use crate::domain::ports::{ApiOutcome, GitHubClient};
use crate::error::{ApiFailure, ErrorKind};

/// Attempt ceiling and wait durations for the commit activity poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    /// Wait after attempt `n` (zero-based) is `base_delay * (n + 1)`
    pub base_delay: Duration,
    /// Fixed wait after a transport failure
    pub network_retry_delay: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(3),
            network_retry_delay: Duration::from_secs(2),
        }
    }
}

impl PollPolicy {
    fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay
            .checked_mul(attempt.saturating_add(1))
            .unwrap_or(Duration::MAX)
    }
}

/// Decision taken after one attempt
enum Step {
    Done(ApiOutcome<Vec<WeeklyCommitSample>>),
    Retry(Duration),
}

/// Polls the commit activity endpoint until GitHub has finished computing it
pub struct CommitActivityPoller<GC>
where
    GC: GitHubClient,
{
    github: Arc<GC>,
    policy: PollPolicy,
}

impl<GC> CommitActivityPoller<GC>
where
    GC: GitHubClient,
{
    pub fn new(github: Arc<GC>, policy: PollPolicy) -> Self {
        Self { github, policy }
    }

    /// Fetch weekly commit activity, retrying while GitHub is still computing.
    ///
    /// Never returns `ApiOutcome::Empty`. `cancel` is checked before every
    /// attempt and interrupts any wait in progress.
    pub async fn fetch_commit_activity(
        &self,
        repo: &RepositoryId,
        cancel: &CancellationToken,
    ) -> ApiOutcome<Vec<WeeklyCommitSample>> {
        let max_attempts = self.policy.max_attempts;

        for attempt in 0..max_attempts {
            if cancel.is_cancelled() {
                return cancelled(repo);
            }

            let is_last = attempt + 1 == max_attempts;
            let outcome = self.github.get_commit_activity(repo).await;

            match self.evaluate(outcome, attempt, is_last) {
                Step::Done(outcome) => return outcome,
                Step::Retry(wait) => {
                    tracing::debug!(
                        "Commit activity for {} not ready (attempt {}/{}), retrying in {:?}",
                        repo,
                        attempt + 1,
                        max_attempts,
                        wait
                    );
                    tokio::select! {
                        _ = cancel.cancelled() => return cancelled(repo),
                        _ = tokio::time::sleep(wait) => {}
                    }
                }
            }
        }

        ApiOutcome::failure(
            ErrorKind::RetriesExhausted,
            "Could not retrieve commit activity after maximum retries",
        )
    }

    fn evaluate(
        &self,
        outcome: ApiOutcome<Vec<WeeklyCommitSample>>,
        attempt: u32,
        is_last: bool,
    ) -> Step {
        match outcome {
            ApiOutcome::Success(weeks) if !weeks.is_empty() => {
                Step::Done(ApiOutcome::Success(weeks))
            }
            ApiOutcome::Success(_) if is_last => Step::Done(ApiOutcome::failure(
                ErrorKind::NoData,
                "No commit data available",
            )),
            // An empty 200 can also mean the statistic is mid-computation
            ApiOutcome::Success(_) => Step::Retry(self.policy.backoff(attempt)),
            ApiOutcome::Empty if is_last => Step::Done(ApiOutcome::failure(
                ErrorKind::StillComputing,
                "GitHub is still calculating statistics. Please try again in a few moments.",
            )),
            ApiOutcome::Empty => Step::Retry(self.policy.backoff(attempt)),
            ApiOutcome::Failure(ApiFailure {
                kind: ErrorKind::NetworkError,
                ..
            }) if !is_last => Step::Retry(self.policy.network_retry_delay),
            ApiOutcome::Failure(ApiFailure {
                kind: ErrorKind::NotFound,
                ..
            }) => Step::Done(ApiOutcome::failure(
                ErrorKind::NotFound,
                "Repository not found or statistics are not available. \
                 For private repositories, make sure your token has the required permissions.",
            )),
            ApiOutcome::Failure(failure) => Step::Done(ApiOutcome::Failure(failure)),
        }
    }
}

fn cancelled(repo: &RepositoryId) -> ApiOutcome<Vec<WeeklyCommitSample>> {
    tracing::debug!("Commit activity poll for {} cancelled", repo);
    ApiOutcome::failure(ErrorKind::Cancelled, "Commit activity request was cancelled")
}
