//! Repository domain entities
//!
//! The owner/name pair an analysis is keyed on, and the metadata GitHub
//! reports for it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AnalysisError;

/// Host substring a repository URL must carry
pub const GITHUB_HOST: &str = "github.com";

/// Owner/name pair identifying a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Extract the owner and repository name from a GitHub URL.
    ///
    /// Segments past the second (`/tree/main`, `/issues`, ...) are ignored.
    pub fn parse_url(raw: &str) -> Result<Self, AnalysisError> {
        let invalid = || AnalysisError::InvalidUrl(raw.to_string());

        let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
        let host = url.host_str().ok_or_else(invalid)?;
        if !host.contains(GITHUB_HOST) {
            return Err(invalid());
        }

        let mut segments = url.path().trim_matches('/').split('/');
        match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name))
            }
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Repository owner as embedded in the metadata payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// License summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryLicense {
    pub name: String,
    #[serde(default)]
    pub spdx_id: Option<String>,
}

/// Repository metadata from `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    /// Size in kilobytes
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub license: Option<RepositoryLicense>,
    pub owner: RepositoryOwner,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub pushed_at: Option<String>,
}

impl RepositoryMetadata {
    /// Rewrite the timestamp fields into a human-readable form.
    ///
    /// Absent or malformed values are left untouched.
    pub fn humanize_dates(&mut self) {
        for field in [&mut self.created_at, &mut self.updated_at, &mut self.pushed_at] {
            if let Some(value) = field.as_mut() {
                *value = format_date(value);
            }
        }
    }
}

/// Format an ISO-8601 UTC timestamp (`2024-01-05T10:00:00Z`) as `Jan 05, 2024`.
/// Input in any other shape is returned as-is.
pub fn format_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ")
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
