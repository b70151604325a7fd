// ABOUTME: HTTP client for the favorites REST resource
// ABOUTME: Surfaces transport and status failures as AppError rather than failing soft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Favorites client
//!
//! ```rust,no_run
//! use mealbook::client::FavoritesClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FavoritesClient::new("http://localhost:5001")?;
//! let saved = client.list("user_123").await?;
//! # Ok(())
//! # }
//! ```

use mealbook_core::errors::{AppError, AppResult, ErrorResponse};
use mealbook_core::models::{Favorite, NewFavorite, Recipe};
use reqwest::{Client, Response, Url};
use std::time::Duration;
use tracing::debug;

const SERVICE_NAME: &str = "favorites backend";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for `/api/favorites`
#[derive(Debug, Clone)]
pub struct FavoritesClient {
    base_url: Url,
    http: Client,
}

impl FavoritesClient {
    /// Create a client for the backend at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::config(format!("Invalid backend URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "Backend URL '{base_url}' cannot carry a path"
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Store a favorite and return the created record
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the payload
    pub async fn add(&self, favorite: &NewFavorite) -> AppResult<Favorite> {
        let url = self.endpoint(&[])?;
        debug!(%url, user_id = %favorite.user_id, recipe_id = %favorite.recipe_id, "Adding favorite");

        let response = self.http.post(url).json(favorite).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<Favorite>().await?)
    }

    /// Save `recipe` for `user_id`, copying its display fields
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the payload
    pub async fn add_recipe(&self, user_id: &str, recipe: &Recipe) -> AppResult<Favorite> {
        self.add(&NewFavorite::from_recipe(user_id, recipe)).await
    }

    /// List a user's favorites, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or fails
    pub async fn list(&self, user_id: &str) -> AppResult<Vec<Favorite>> {
        let url = self.endpoint(&[user_id])?;
        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<Vec<Favorite>>().await?)
    }

    /// Remove a favorite; removing one that does not exist succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or fails
    pub async fn remove(&self, user_id: &str, recipe_id: &str) -> AppResult<()> {
        let url = self.endpoint(&[user_id, recipe_id])?;
        let response = self.http.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Whether `recipe_id` is among the user's favorites
    ///
    /// # Errors
    ///
    /// Returns an error if the list request fails
    pub async fn is_favorite(&self, user_id: &str, recipe_id: &str) -> AppResult<bool> {
        Ok(self
            .list(user_id)
            .await?
            .iter()
            .any(|favorite| favorite.recipe_id == recipe_id))
    }

    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::config("Backend URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["api", "favorites"])
            .extend(segments);
        Ok(url)
    }
}

async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(parsed) => AppError::new(parsed.error.code, parsed.error.message),
        Err(_) => AppError::external_service(SERVICE_NAME, format!("HTTP {status}")),
    })
}
