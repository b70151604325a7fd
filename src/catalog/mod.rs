// ABOUTME: Recipe catalog access: the fail-soft source trait, raw records and normalization
// ABOUTME: TheMealDB is the production source; tests substitute in-memory sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! # Recipe Catalog
//!
//! A [`RecipeSource`] performs one catalog query per method and never fails:
//! transport, status and parse errors are logged by the implementation and
//! surface as an empty list or `None`. Callers that need resilience (retries,
//! deadlines) must add it on top.

/// `TheMealDB` HTTP client
pub mod mealdb;

/// Raw catalog record → canonical `Recipe`
pub mod normalize;

/// Schema-less catalog payloads
pub mod raw;

use async_trait::async_trait;

pub use mealdb::{MealDbClient, MealDbClientConfig};
pub use normalize::{normalize, normalize_all, transform_categories};
pub use raw::{RawCategory, RawMeal};

/// Read-only access to the third-party recipe catalog
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Meals whose name matches `query`
    async fn search_by_name(&self, query: &str) -> Vec<RawMeal>;

    /// A single meal by catalog id
    async fn lookup_by_id(&self, id: &str) -> Option<RawMeal>;

    /// One random meal
    async fn random(&self) -> Option<RawMeal>;

    /// Meals in a category (the catalog returns partial records here)
    async fn filter_by_category(&self, category: &str) -> Vec<RawMeal>;

    /// Meals using an ingredient (partial records)
    async fn filter_by_ingredient(&self, ingredient: &str) -> Vec<RawMeal>;

    /// The full category list
    async fn list_categories(&self) -> Vec<RawCategory>;
}
