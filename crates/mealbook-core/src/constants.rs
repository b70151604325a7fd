// ABOUTME: Constants for catalog schema bounds, display placeholders and service defaults
// ABOUTME: Shared by the normalizer, the favorites backend, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Application constants organized by domain

/// Source catalog schema and display conventions
pub mod catalog {
    /// Default `TheMealDB` v1 endpoint (public test key `1`)
    pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

    /// Service name used in logs and error messages
    pub const SERVICE_NAME: &str = "TheMealDB";

    /// Highest indexed `strIngredientN` / `strMeasureN` slot the catalog exposes.
    ///
    /// Tied to the catalog's flat record schema; slots beyond it are ignored.
    pub const INGREDIENT_SLOT_LIMIT: usize = 20;

    /// Characters of instructions text kept in a recipe description
    pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;

    /// Suffix always appended to a non-empty description
    pub const DESCRIPTION_SUFFIX: &str = "...";

    /// Placeholder for fields the catalog does not provide
    pub const NOT_AVAILABLE: &str = "N/A";

    /// Random recipes requested for the home feed
    pub const HOME_FEED_RECIPE_COUNT: usize = 12;

    /// Default per-request timeout for catalog calls
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Favorites backend defaults
pub mod server {
    /// Service name for structured logging
    pub const SERVICE_NAME: &str = "mealbook-server";

    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 5001;

    /// Default SQLite database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/mealbook.db";

    /// Default keep-alive period (14 minutes)
    pub const DEFAULT_KEEPALIVE_INTERVAL_SECS: u64 = 14 * 60;

    /// Favorites collection path
    pub const FAVORITES_PATH: &str = "/api/favorites";

    /// Health check path
    pub const HEALTH_PATH: &str = "/api/health";
}
