//! Contributor domain entity

use serde::{Deserialize, Serialize};

/// Maximum number of contributors requested per analysis
pub const CONTRIBUTORS_PER_PAGE: u32 = 10;

/// A repository contributor from `GET /repos/{owner}/{repo}/contributors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    pub contributions: u64,
}
