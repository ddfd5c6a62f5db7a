// ============================================================================
// ROUTE PLANNING DATA API
// ============================================================================

// - Serves clients.json and vehicles.json from the data directory as-is
// - Health probe
// - CORS restricted to a fixed origin allow-list
// - Structured logging

mod config;
mod errors;
mod routes;
mod states;
mod store;

use anyhow::Context;
use config::Config;
use states::AppState;
use store::DataStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    // Configure CORS
    let cors = routes::cors_layer(config.origin_header_values()?);

    let state = AppState::new(DataStore::new(&config.data_dir));
    info!("Data directory: {}", state.store.dir().display());
    let app = routes::build_router(state, cors);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server running on http://{}", addr);
    info!("Allowed origins: {}", config.allowed_origins.join(", "));
    info!("API Endpoints:");
    info!("  GET    /health           - Health check");
    info!("  GET    /routes/clients   - Client records");
    info!("  GET    /routes/vehicles  - Vehicle records");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
