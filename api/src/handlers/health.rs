use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::ports::GitHubClient;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Whether GitHub requests carry a token
    authenticated: bool,
}

/// GET /health
pub async fn health<GC>(State(state): State<AppState<GC>>) -> Json<HealthResponse>
where
    GC: GitHubClient + 'static,
{
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        authenticated: state.authenticated,
    })
}
