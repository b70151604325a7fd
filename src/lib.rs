// ABOUTME: Main library entry point for the Mealbook recipe browser and favorites backend
// ABOUTME: Catalog access, recipe normalization, home-feed aggregation and the favorites API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

#![deny(unsafe_code)]

//! # Mealbook
//!
//! A recipe browser over a public recipe catalog with a small favorites
//! backend.
//!
//! ## Architecture
//!
//! - **Catalog**: fail-soft client for the catalog API and the pure
//!   normalizer turning raw records into [`mealbook_core::models::Recipe`]
//! - **Feed**: concurrent home-screen aggregation and the per-screen
//!   [`feed::HomeController`]
//! - **Favorites**: axum routes over SQLite, plus an HTTP client for them
//! - **Jobs**: the production keep-alive ping
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealbook::catalog::{MealDbClient, MealDbClientConfig};
//! use mealbook::feed::load_home_feed;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MealDbClient::new(MealDbClientConfig::default())?;
//! let feed = load_home_feed(&client, 12).await;
//! println!("{} categories, {} recipes", feed.categories.len(), feed.recipes.len());
//! # Ok(())
//! # }
//! ```

/// Recipe catalog access and normalization
pub mod catalog;

/// Favorites backend client
pub mod client;

/// Environment configuration
pub mod config;

/// SQLite favorites storage
pub mod database;

/// Home-screen aggregation and view state
pub mod feed;

/// Background jobs
pub mod jobs;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

pub use mealbook_core::{constants, errors, models};
