//! Mock implementations of port traits
//!
//! Scripted in-memory GitHub client that records every call it receives.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{
    Contributor, RateLimitStatus, RepositoryId, RepositoryMetadata, WeeklyCommitSample,
};
use crate::domain::ports::{ApiOutcome, GitHubClient};
use crate::error::ErrorKind;

// ============================================================================
// Mock GitHub Client
// ============================================================================

/// GitHub client returning preconfigured outcomes.
///
/// Repository, contributor and rate limit calls return the same configured
/// outcome every time. Commit activity calls consume a script front to back;
/// the last entry repeats once the script runs out.
pub struct MockGitHubClient {
    repository: Arc<RwLock<ApiOutcome<RepositoryMetadata>>>,
    contributors: Arc<RwLock<ApiOutcome<Vec<Contributor>>>>,
    commit_activity: Arc<RwLock<VecDeque<ApiOutcome<Vec<WeeklyCommitSample>>>>>,
    rate_limit: Arc<RwLock<ApiOutcome<RateLimitStatus>>>,
    /// Endpoint names in call order
    calls: Arc<RwLock<Vec<&'static str>>>,
    contributor_pages: Arc<RwLock<Vec<u32>>>,
}

impl Default for MockGitHubClient {
    fn default() -> Self {
        Self {
            repository: Arc::new(RwLock::new(ApiOutcome::failure(
                ErrorKind::NotFound,
                "Repository not found. Check the URL and try again.",
            ))),
            contributors: Arc::new(RwLock::new(ApiOutcome::Success(Vec::new()))),
            commit_activity: Arc::new(RwLock::new(VecDeque::new())),
            rate_limit: Arc::new(RwLock::new(ApiOutcome::Success(RateLimitStatus::Unknown))),
            calls: Arc::new(RwLock::new(Vec::new())),
            contributor_pages: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(self, outcome: ApiOutcome<RepositoryMetadata>) -> Self {
        *self.repository.write().unwrap() = outcome;
        self
    }

    pub fn with_contributors(self, outcome: ApiOutcome<Vec<Contributor>>) -> Self {
        *self.contributors.write().unwrap() = outcome;
        self
    }

    /// Replace the commit activity script
    pub fn with_commit_activity(self, script: Vec<ApiOutcome<Vec<WeeklyCommitSample>>>) -> Self {
        *self.commit_activity.write().unwrap() = script.into();
        self
    }

    pub fn with_rate_limit(self, outcome: ApiOutcome<RateLimitStatus>) -> Self {
        *self.rate_limit.write().unwrap() = outcome;
        self
    }

    fn record(&self, endpoint: &'static str) {
        self.calls.write().unwrap().push(endpoint);
    }

    fn count(&self, endpoint: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|c| **c == endpoint)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn repository_calls(&self) -> usize {
        self.count("repository")
    }

    pub fn contributor_calls(&self) -> usize {
        self.count("contributors")
    }

    pub fn commit_activity_calls(&self) -> usize {
        self.count("commit_activity")
    }

    pub fn rate_limit_calls(&self) -> usize {
        self.count("rate_limit")
    }

    /// `per_page` values requested, in call order
    pub fn contributor_pages(&self) -> Vec<u32> {
        self.contributor_pages.read().unwrap().clone()
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn get_repository(&self, _repo: &RepositoryId) -> ApiOutcome<RepositoryMetadata> {
        self.record("repository");
        self.repository.read().unwrap().clone()
    }

    async fn list_contributors(
        &self,
        _repo: &RepositoryId,
        per_page: u32,
    ) -> ApiOutcome<Vec<Contributor>> {
        self.record("contributors");
        self.contributor_pages.write().unwrap().push(per_page);
        self.contributors.read().unwrap().clone()
    }

    async fn get_commit_activity(
        &self,
        _repo: &RepositoryId,
    ) -> ApiOutcome<Vec<WeeklyCommitSample>> {
        self.record("commit_activity");
        let mut script = self.commit_activity.write().unwrap();
        match script.len() {
            0 => ApiOutcome::Empty,
            1 => script[0].clone(),
            _ => script.pop_front().unwrap_or(ApiOutcome::Empty),
        }
    }

    async fn get_rate_limit(&self) -> ApiOutcome<RateLimitStatus> {
        self.record("rate_limit");
        self.rate_limit.read().unwrap().clone()
    }
}
