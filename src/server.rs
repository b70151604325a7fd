// ABOUTME: HTTP server assembly for the favorites backend
// ABOUTME: Shares resources with handlers, layers tracing and CORS, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Server assembly
//!
//! [`build_router`] is used both by the server binary and by integration
//! tests that drive the router in-process.

use crate::{
    config::ServerConfig,
    database::Database,
    middleware::{request_id_layers, setup_cors, trace_layer},
    routes::{FavoritesRoutes, HealthRoutes},
};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Resources shared by every request handler
#[derive(Clone)]
pub struct ServerResources {
    /// Favorites storage
    pub database: Database,
    /// Effective configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle the database and configuration
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database,
            config: Arc::new(config),
        }
    }
}

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(FavoritesRoutes::routes(Arc::clone(&resources)))
        .layer(setup_cors(&resources.config))
        .layer(propagate_request_id)
        .layer(trace_layer())
        .layer(set_request_id)
}

/// Bind the configured address and serve until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let host = resources.config.host.clone();
    let port = resources.config.http_port;
    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;

    serve_on(listener, resources).await
}

/// Serve on an already-bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server fails while running
pub async fn serve_on(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!(%addr, "Server listening");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
