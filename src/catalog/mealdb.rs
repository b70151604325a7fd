// ABOUTME: TheMealDB API client implementing the fail-soft RecipeSource contract
// ABOUTME: Converts transport, status and parse failures into empty results after logging them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! `TheMealDB` API Client
//!
//! # API Reference
//! <https://www.themealdb.com/api.php>
//!
//! # Example
//! ```rust,no_run
//! use mealbook::catalog::{MealDbClient, MealDbClientConfig, RecipeSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MealDbClient::new(MealDbClientConfig::default())?;
//! let meals = client.search_by_name("arrabiata").await;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use mealbook_core::constants::catalog::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, SERVICE_NAME};
use mealbook_core::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

use super::raw::{CategoriesEnvelope, MealsEnvelope, RawCategory, RawMeal};
use super::RecipeSource;

/// Catalog client configuration
#[derive(Debug, Clone)]
pub struct MealDbClientConfig {
    /// Base URL including the API key path segment
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MealDbClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `TheMealDB` API client
#[derive(Debug, Clone)]
pub struct MealDbClient {
    config: MealDbClientConfig,
    http_client: reqwest::Client,
}

impl MealDbClient {
    /// Create a new catalog client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: MealDbClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Base URL this client queries
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!(
            "{}/{endpoint}",
            self.config.base_url.trim_end_matches('/')
        );
        debug!(%url, ?query, "Querying recipe catalog");

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::external_unavailable(SERVICE_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status} from {endpoint}"),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })
    }

    async fn fetch_meals(
        &self,
        operation: &'static str,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Vec<RawMeal> {
        match self.fetch::<MealsEnvelope>(endpoint, query).await {
            Ok(envelope) => envelope.into_meals(),
            Err(e) => {
                error!(operation, error = %e, "Recipe catalog request failed");
                Vec::new()
            }
        }
    }

    async fn fetch_one(
        &self,
        operation: &'static str,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Option<RawMeal> {
        self.fetch_meals(operation, endpoint, query)
            .await
            .into_iter()
            .next()
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_name(&self, query: &str) -> Vec<RawMeal> {
        self.fetch_meals("search_by_name", "search.php", &[("s", query)])
            .await
    }

    async fn lookup_by_id(&self, id: &str) -> Option<RawMeal> {
        self.fetch_one("lookup_by_id", "lookup.php", &[("i", id)])
            .await
    }

    async fn random(&self) -> Option<RawMeal> {
        self.fetch_one("random", "random.php", &[]).await
    }

    async fn filter_by_category(&self, category: &str) -> Vec<RawMeal> {
        self.fetch_meals("filter_by_category", "filter.php", &[("c", category)])
            .await
    }

    async fn filter_by_ingredient(&self, ingredient: &str) -> Vec<RawMeal> {
        self.fetch_meals("filter_by_ingredient", "filter.php", &[("i", ingredient)])
            .await
    }

    async fn list_categories(&self) -> Vec<RawCategory> {
        match self
            .fetch::<CategoriesEnvelope>("categories.php", &[])
            .await
        {
            Ok(envelope) => envelope.into_categories(),
            Err(e) => {
                error!(operation = "list_categories", error = %e, "Recipe catalog request failed");
                Vec::new()
            }
        }
    }
}
