// ABOUTME: Health check route handler for uptime monitoring and the keep-alive job
// ABOUTME: Reports a static ok status with the current timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Health check routes for service monitoring

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};
        use mealbook_core::constants::server::HEALTH_PATH;

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "success": true,
                "status": "ok",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn root_handler() -> &'static str {
            "Hello, World!"
        }

        Router::new()
            .route("/", get(root_handler))
            .route(HEALTH_PATH, get(health_handler))
    }
}
