// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, server resources and a spawned backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `mealbook`

use anyhow::Result;
use mealbook::{
    config::{
        environment::{CorsConfig, DatabaseConfig, KeepAliveConfig},
        Environment, LogLevel, ServerConfig,
    },
    database::Database,
    models::NewFavorite,
    server::{build_router, ServerResources},
};
use std::{
    net::SocketAddr,
    sync::{Arc, Once},
};
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration suitable for in-process tests
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".to_owned(),
        environment: Environment::Testing,
        log_level: LogLevel::Warn,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
        keepalive: KeepAliveConfig {
            url: None,
            interval_secs: 840,
        },
    }
}

/// Standard in-memory test database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Server resources backed by an in-memory database
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(database, test_server_config())))
}

/// Serve the full router on an ephemeral local port
pub async fn spawn_test_server() -> Result<(SocketAddr, Arc<ServerResources>)> {
    let resources = create_test_server_resources().await?;
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let app = build_router(Arc::clone(&resources));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((addr, resources))
}

/// A favorite payload with display fields filled in
pub fn sample_favorite(user_id: &str, recipe_id: &str, title: &str) -> NewFavorite {
    NewFavorite {
        user_id: user_id.to_owned(),
        recipe_id: recipe_id.to_owned(),
        title: title.to_owned(),
        image: Some(format!("https://img.example/{recipe_id}.jpg")),
        cook_time: Some("N/A".to_owned()),
        servings: Some("N/A".to_owned()),
    }
}
