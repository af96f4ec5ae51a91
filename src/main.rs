// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::rate_repository::RateRepository;
use crate::infrastructure::config::load_config;
use crate::infrastructure::rate_api_client::RateApiClient;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_config()?;

    // Create repository (infrastructure layer)
    let repository: Arc<dyn RateRepository> =
        Arc::new(RateApiClient::new(config.upstream.base_url.clone()));

    // Create services (application layer)
    let state = Arc::new(AppState::new(repository, &config.currency));

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.listen.parse()?;
    tracing::info!(
        "Starting rate-dashboard on {} (upstream {}, base {})",
        addr,
        config.upstream.base_url,
        config.currency.base
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
