use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::app::PollPolicy;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Clone)]
pub struct Config {
    /// Personal access token; unauthenticated requests get a much lower rate limit
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub http_timeout: Duration,
    pub poll_policy: PollPolicy,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = PollPolicy::default();

        Self {
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string()),
            http_timeout: Duration::from_secs(parse_var("HTTP_TIMEOUT_SECS", 30)),
            poll_policy: PollPolicy {
                max_attempts: parse_var("POLL_MAX_ATTEMPTS", defaults.max_attempts),
                base_delay: Duration::from_secs(parse_var(
                    "POLL_BASE_DELAY_SECS",
                    defaults.base_delay.as_secs(),
                )),
                network_retry_delay: Duration::from_secs(parse_var(
                    "POLL_NETWORK_RETRY_DELAY_SECS",
                    defaults.network_retry_delay.as_secs(),
                )),
            },
            port: parse_var("PORT", 8080),
        }
    }

    /// Check if requests will be authenticated
    pub fn authenticated(&self) -> bool {
        self.github_token.is_some()
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
