//! Blip Quickstart - Main Application Entry Point
//!
//! Welcome to the Blip quickstart! This server exposes a set of helpful
//! routes, API endpoint interactions, sample data, and a scripted workflow
//! that will help you take advantage of all the Blip API has to offer.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the Blip API client (base URL + API key header)
//! 3. Build the HTTP router
//! 4. Start the server on the configured port

use blip_quickstart::{AppState, app, client::BlipClient, config::Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Build the Blip API client
    let client = BlipClient::new(&config)?;
    tracing::info!(base_url = %config.blip_api_url, "Blip client ready");

    let state = AppState {
        client,
        data_dir: config.data_dir.clone(),
    };
    let app = app(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
