//! Router construction

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::ports::GitHubClient;
use crate::handlers;
use crate::AppState;

/// Build the API router over any GitHub client implementation
pub fn router<GC>(state: AppState<GC>) -> Router
where
    GC: GitHubClient + 'static,
{
    Router::new()
        .route("/health", get(handlers::health::<GC>))
        .route("/analyze", post(handlers::analyze::<GC>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
