//! GitHub adapter
//!
//! Implementation of the GitHub API client and its response classifier.

pub mod client;
pub mod response;

pub use client::GitHubClientImpl;
pub use response::classify;
