//! GitHub response classification
//!
//! Turns a raw status/headers/body triple into an [`ApiOutcome`]. No I/O and
//! no retries happen here.

use chrono::DateTime;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::domain::ports::ApiOutcome;
use crate::error::ErrorKind;

pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
pub const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Classify a GitHub API response.
///
/// A blank body is decoded as JSON `null`.
pub fn classify<T: DeserializeOwned>(
    status: u16,
    headers: &HeaderMap,
    body: &[u8],
) -> ApiOutcome<T> {
    match status {
        200 => decode(body),
        202 => ApiOutcome::Empty,
        401 => ApiOutcome::failure(
            ErrorKind::Unauthorized,
            "Authentication failed. Please check your GitHub token.",
        ),
        403 if header_str(headers, RATE_LIMIT_REMAINING).unwrap_or("0") == "0" => {
            ApiOutcome::failure(
                ErrorKind::RateLimited,
                format!(
                    "API rate limit exceeded. Limit resets at {}.",
                    reset_time(headers)
                ),
            )
        }
        403 => ApiOutcome::failure(
            ErrorKind::Forbidden,
            "API access forbidden. Check your token or permissions.",
        ),
        404 => ApiOutcome::failure(
            ErrorKind::NotFound,
            "Repository not found. Check the URL and try again.",
        ),
        other => ApiOutcome::failure(ErrorKind::ApiError, format!("GitHub API error: {}", other)),
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> ApiOutcome<T> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        body
    };

    match serde_json::from_slice(body) {
        Ok(value) => ApiOutcome::Success(value),
        Err(e) => ApiOutcome::failure(
            ErrorKind::ApiError,
            format!("Failed to decode API response: {}", e),
        ),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::trim)
}

/// `HH:MM:SS UTC` rendering of the `X-RateLimit-Reset` epoch header
fn reset_time(headers: &HeaderMap) -> String {
    header_str(headers, RATE_LIMIT_RESET)
        .and_then(|v| v.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "an unknown time".to_string())
}
