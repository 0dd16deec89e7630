//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod commit_activity_poller;
pub mod metrics;
pub mod repository_analyzer;

pub use commit_activity_poller::{CommitActivityPoller, PollPolicy};
pub use metrics::aggregate;
pub use repository_analyzer::RepositoryAnalyzer;
