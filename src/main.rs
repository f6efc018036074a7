//! Algodex - Application Entry Point
//!
//! This is the main entry point for the Algodex server.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algodex::{config::Config, handlers, state::AppState, store::JsonStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before anything else; the log filter comes from it
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Algodex server...");

    // Prepare the document store
    let store = JsonStore::new(config.storage.data_dir.clone());
    store.ensure_data_dir().await?;
    tracing::info!(data_dir = %store.data_dir().display(), "Catalog documents ready");

    // Create application state
    let state = AppState::new(store, config.clone());

    // Build the router
    let app = Router::new()
        .nest("/api/v1", handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
