// ABOUTME: Route module organization for the Mealbook HTTP endpoints
// ABOUTME: Groups health and favorites routes with thin handlers over the database layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Route module for the favorites backend

/// Favorite recipes CRUD routes
pub mod favorites;
/// Health check routes
pub mod health;

/// Favorites route handlers
pub use favorites::FavoritesRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
