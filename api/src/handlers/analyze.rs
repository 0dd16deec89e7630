//! Analysis handlers
//!
//! Endpoint that turns a submitted repository URL into an analysis.

use axum::{extract::State, Json};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::AnalysisResult;
use crate::domain::ports::GitHubClient;
use crate::error::AppError;
use crate::AppState;

/// Request body for a repository analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Repository URL, e.g. `https://github.com/owner/repo`
    pub repo_url: String,
}

/// POST /analyze
///
/// Analyze a GitHub repository. Degraded sub-fetches come back as warnings
/// inside a 200 response; only an invalid URL or an inaccessible repository
/// is an error.
pub async fn analyze<GC>(
    State(state): State<AppState<GC>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError>
where
    GC: GitHubClient + 'static,
{
    if request.repo_url.trim().is_empty() {
        return Err(AppError::BadRequest("repo_url is required".to_string()));
    }

    // Dropped with the request future, which stops any commit activity poll
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let result = state
        .analyzer
        .analyze(&request.repo_url, &cancel)
        .await?;

    Ok(Json(result))
}
