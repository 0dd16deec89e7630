//! GitHub API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use urlencoding::encode;

use super::classify;
use crate::config::Config;
use crate::domain::entities::{
    Contributor, RateLimitStatus, RepositoryId, RepositoryMetadata, WeeklyCommitSample,
};
use crate::domain::ports::{ApiOutcome, GitHubClient};
use crate::error::ErrorKind;

const USER_AGENT: &str = concat!("repo-insights/", env!("CARGO_PKG_VERSION"));

/// Implementation of the GitHub API client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClientImpl {
    pub fn new(
        base_url: String,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static("2022-11-28"));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.github_api_url.clone(),
            config.github_token.clone(),
            config.http_timeout,
        )
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn repo_path(repo: &RepositoryId, suffix: &str) -> String {
        format!("/repos/{}/{}{}", encode(&repo.owner), encode(&repo.name), suffix)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiOutcome<T> {
        let url = self.api_url(path);
        tracing::debug!("GET {}", url);

        let mut request = self.http.get(&url).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                return ApiOutcome::failure(
                    ErrorKind::NetworkError,
                    format!("Network error: {}", e),
                );
            }
        };

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Reading response from {} failed: {}", url, e);
                return ApiOutcome::failure(
                    ErrorKind::NetworkError,
                    format!("Network error: {}", e),
                );
            }
        };

        tracing::debug!("GET {} -> {}", url, status);
        classify(status, &headers, &body)
    }
}

/// Response from `GET /rate_limit`
#[derive(Deserialize)]
struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Deserialize)]
struct RateLimitResources {
    core: RateLimitResource,
}

#[derive(Deserialize)]
struct RateLimitResource {
    limit: u64,
    remaining: u64,
    reset: i64,
}

impl From<RateLimitResponse> for RateLimitStatus {
    fn from(r: RateLimitResponse) -> Self {
        let core = r.resources.core;
        match DateTime::from_timestamp(core.reset, 0) {
            Some(reset_at) => RateLimitStatus::Known {
                remaining: core.remaining,
                limit: core.limit,
                reset_at,
            },
            None => RateLimitStatus::Unknown,
        }
    }
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn get_repository(&self, repo: &RepositoryId) -> ApiOutcome<RepositoryMetadata> {
        self.get(&Self::repo_path(repo, ""), &[]).await
    }

    async fn list_contributors(
        &self,
        repo: &RepositoryId,
        per_page: u32,
    ) -> ApiOutcome<Vec<Contributor>> {
        self.get(
            &Self::repo_path(repo, "/contributors"),
            &[("per_page", per_page.to_string())],
        )
        .await
    }

    async fn get_commit_activity(
        &self,
        repo: &RepositoryId,
    ) -> ApiOutcome<Vec<WeeklyCommitSample>> {
        // While computing, GitHub answers with `{}` or an empty body rather than a list
        match self
            .get::<Value>(&Self::repo_path(repo, "/stats/commit_activity"), &[])
            .await
        {
            ApiOutcome::Success(Value::Array(weeks)) => {
                match serde_json::from_value(Value::Array(weeks)) {
                    Ok(samples) => ApiOutcome::Success(samples),
                    Err(e) => ApiOutcome::failure(
                        ErrorKind::ApiError,
                        format!("Failed to decode commit activity: {}", e),
                    ),
                }
            }
            ApiOutcome::Success(_) => ApiOutcome::Success(Vec::new()),
            ApiOutcome::Empty => ApiOutcome::Empty,
            ApiOutcome::Failure(failure) => ApiOutcome::Failure(failure),
        }
    }

    async fn get_rate_limit(&self) -> ApiOutcome<RateLimitStatus> {
        self.get::<RateLimitResponse>("/rate_limit", &[])
            .await
            .map(RateLimitStatus::from)
    }
}
