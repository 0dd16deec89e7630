//! Unified error types for the repo-insights API
//!
//! This module defines error types for each layer:
//! - `ErrorKind` / `ApiFailure`: classified failures of a single GitHub API call
//! - `AnalysisError`: fatal outcomes of a repository analysis
//! - `AppError`: Application layer errors (wraps analysis errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Classification of a failed GitHub API call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidUrl,
    Unauthorized,
    RateLimited,
    Forbidden,
    NotFound,
    ApiError,
    NoData,
    StillComputing,
    RetriesExhausted,
    NetworkError,
    /// The caller abandoned the request while a retry loop was waiting
    Cancelled,
}

/// A classified failure with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct ApiFailure {
    pub kind: ErrorKind,
    pub detail: String,
}

impl ApiFailure {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// Fatal analysis errors - no partial result is produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Invalid GitHub URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Fetch(#[from] ApiFailure),
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            AnalysisError::Fetch(failure) => failure.kind,
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Analysis(AnalysisError::InvalidUrl(url)) => (
                StatusCode::BAD_REQUEST,
                "Invalid GitHub URL. Please enter a valid repository URL.",
                Some(url.clone()),
            ),
            AppError::Analysis(err @ AnalysisError::Fetch(failure)) => {
                tracing::warn!("Analysis failed ({:?}): {}", err.kind(), failure.detail);
                let status = match err.kind() {
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                    ErrorKind::Forbidden => StatusCode::FORBIDDEN,
                    ErrorKind::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, "GitHub request failed", Some(failure.detail.clone()))
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
