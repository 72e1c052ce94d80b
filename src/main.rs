// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::net::SocketAddr;
use std::sync::Arc;

use hotspot_register::{AppState, Config, MetricsRegistry, Result, create_router};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();

    tracing::info!(
        "Managing hotspot users on router {} as '{}'",
        config.router.address(),
        config.router.username
    );
    tracing::info!(
        "New accounts get profile '{}'{}",
        config.hotspot.profile,
        config
            .hotspot
            .server
            .as_deref()
            .map(|s| format!(" on server '{s}'"))
            .unwrap_or_default()
    );
    tracing::debug!(
        "RouterOS client: timeout {:?}, {} attempt(s), retry delay {:?}, wire debug {}",
        config.client.timeout,
        config.client.attempts,
        config.client.retry_delay,
        config.client.debug
    );

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let state = Arc::new(AppState {
        config,
        metrics: MetricsRegistry::new(),
    });

    // Graceful shutdown channel
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Hotspot registration service starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /health   - Health check");
    tracing::info!("  - GET  /metrics  - Prometheus metrics");
    tracing::info!("  - POST /register - Create hotspot account");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; plain "info" otherwise
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
