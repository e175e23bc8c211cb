//! Voltdash REST API Server
//!
//! This binary loads the EV registration dataset in the background and
//! serves list, lookup and statistics endpoints over it.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use voltdash_client::DatasetSourceEnum;
use voltdash_core::{DatasetCache, DatasetLoader, VehicleSource};

use voltdash_server::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let config = ServerConfig::parse();

    let source = DatasetSourceEnum::from_config(&config.dataset_config())
        .context("Invalid dataset source")?;
    let source_description = source.describe();

    // Create shutdown token for graceful shutdown
    let shutdown_token = CancellationToken::new();

    // Load the dataset in the background; requests see an empty list until it lands
    let cache = DatasetCache::new();
    let loader_handle = {
        let loader = DatasetLoader::new(source);
        let cache = cache.clone();
        let token = shutdown_token.clone();
        tokio::spawn(async move {
            let status = loader.load_into(&cache, token).await;
            info!("Dataset status: {}", status.as_str());
        })
    };

    // Create application state
    let app_state = AppState::new(cache, source_description);

    // Build router
    let app = create_router(app_state, &config);

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid address")?;

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Starting Voltdash API server on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    // Start server with graceful shutdown
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(shutdown_token))
    .await
    .context("Server error")?;

    loader_handle.await.context("Dataset loader task panicked")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");

    // Abort an in-flight dataset load
    shutdown_token.cancel();
}
