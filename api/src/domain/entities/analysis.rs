//! Analysis result
//!
//! The consolidated, best-effort view of a repository handed to callers.

use serde::Serialize;

use super::commit_activity::CommitMetrics;
use super::contributor::Contributor;
use super::rate_limit::RateLimitStatus;
use super::repository::{RepositoryId, RepositoryMetadata};

/// Outcome of a successful analysis.
///
/// Contributor and commit sub-fetches degrade to empty values with a warning
/// instead of failing the analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub repository_id: RepositoryId,
    pub repository: RepositoryMetadata,
    pub contributors: Vec<Contributor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_warning: Option<String>,
    pub commit_metrics: CommitMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_warning: Option<String>,
    pub rate_limit: RateLimitStatus,
}

impl AnalysisResult {
    /// All non-fatal warnings attached to this result
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.contributor_warning
            .as_deref()
            .into_iter()
            .chain(self.commit_warning.as_deref())
    }
}
