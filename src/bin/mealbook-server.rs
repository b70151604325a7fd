// ABOUTME: Favorites backend server binary
// ABOUTME: Loads environment configuration, opens SQLite, starts the keep-alive job and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! # Mealbook Server Binary
//!
//! Serves the favorites REST resource and the health endpoint.

use anyhow::Result;
use clap::Parser;
use mealbook::{
    config::ServerConfig,
    database::Database,
    jobs::KeepAliveJob,
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mealbook-server")]
#[command(about = "Mealbook favorites backend")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting Mealbook server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized");

    let keepalive = match (&config.keepalive.url, config.keepalive_enabled()) {
        (Some(url), true) => Some(KeepAliveJob::new(url.clone(), config.keepalive.interval())?.spawn()),
        _ => {
            info!("Keep-alive job disabled");
            None
        }
    };

    let resources = Arc::new(ServerResources::new(database, config));
    let result = server::serve(resources).await;

    if let Some(handle) = keepalive {
        handle.shutdown().await;
    }

    if let Err(e) = &result {
        error!("Server error: {e:#}");
    }
    result
}
