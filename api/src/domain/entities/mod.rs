//! Domain entities
//!
//! Pure domain models for repository analytics.

pub mod analysis;
pub mod commit_activity;
pub mod contributor;
pub mod rate_limit;
pub mod repository;

pub use analysis::AnalysisResult;
pub use commit_activity::{CommitMetrics, WeeklyCommitSample, RECENT_WEEKS};
pub use contributor::{Contributor, CONTRIBUTORS_PER_PAGE};
pub use rate_limit::RateLimitStatus;
pub use repository::{RepositoryId, RepositoryMetadata};
