//! repo-insights API server
//!
//! Analyzes GitHub repositories: metadata, top contributors, weekly commit
//! activity and the remaining API quota.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod routes;

#[cfg(test)]
mod test_utils;

use adapters::GitHubClientImpl;
use app::RepositoryAnalyzer;
use config::Config;
use domain::ports::GitHubClient;

/// Application state shared across all handlers
pub struct AppState<GC>
where
    GC: GitHubClient,
{
    pub analyzer: Arc<RepositoryAnalyzer<GC>>,
    pub authenticated: bool,
}

impl<GC> Clone for AppState<GC>
where
    GC: GitHubClient,
{
    fn clone(&self) -> Self {
        Self {
            analyzer: self.analyzer.clone(),
            authenticated: self.authenticated,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,repo_insights_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting repo-insights API...");

    // Load configuration
    let config = Config::from_env();
    if !config.authenticated() {
        tracing::warn!("GITHUB_TOKEN not set; GitHub requests are unauthenticated");
    }

    let github = Arc::new(
        GitHubClientImpl::from_config(&config).context("Failed to build GitHub client")?,
    );
    let analyzer = Arc::new(RepositoryAnalyzer::new(github, config.poll_policy));

    let state = AppState {
        analyzer,
        authenticated: config.authenticated(),
    };

    // Every analysis costs several upstream calls: 1 req/sec sustained, burst of 5
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(1)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    let app = routes::router(state).layer(GovernorLayer {
        config: governor_config,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
