// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::load_server_config;
use crate::infrastructure::memory_store::InMemoryStore;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = load_server_config()?;

    // Create store (infrastructure layer), shared by ingest and charting
    let store = Arc::new(InMemoryStore::new());

    // Create application state
    let state = Arc::new(AppState::new(store));

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr = config.server.listen_addr();
    tracing::info!("Starting carview-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
