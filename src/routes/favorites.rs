// ABOUTME: Route handlers for the favorites REST resource
// ABOUTME: Create, list and delete favorite recipes keyed by caller-supplied user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Favorites routes
//!
//! No authentication happens here: identity is established by the client's
//! auth provider and `userId` is passed through as given.

use crate::{database::FavoritesManager, server::ServerResources};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use mealbook_core::{
    constants::server::FAVORITES_PATH,
    errors::{AppError, ErrorCode},
    models::NewFavorite,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Recipe ids arrive as text from most clients and as integers from some
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecipeKey {
    /// `"52772"`
    Text(String),
    /// `52772`
    Number(i64),
}

impl RecipeKey {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Request body for POST /api/favorites
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteBody {
    /// Owner of the favorite
    pub user_id: Option<String>,
    /// Catalog recipe id
    pub recipe_id: Option<RecipeKey>,
    /// Recipe title
    pub title: Option<String>,
    /// Thumbnail URL
    pub image: Option<String>,
    /// Display cook time
    pub cook_time: Option<String>,
    /// Display servings
    pub servings: Option<String>,
}

impl CreateFavoriteBody {
    /// Presence check for `userId`, `recipeId` and `title`; blank text counts as missing
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` naming every absent field
    pub fn validate(self) -> Result<NewFavorite, AppError> {
        let user_id = self.user_id.filter(|v| !v.trim().is_empty());
        let recipe_id = self
            .recipe_id
            .map(RecipeKey::into_text)
            .filter(|v| !v.trim().is_empty());
        let title = self.title.filter(|v| !v.trim().is_empty());

        match (user_id, recipe_id, title) {
            (Some(user_id), Some(recipe_id), Some(title)) => Ok(NewFavorite {
                user_id,
                recipe_id,
                title,
                image: self.image,
                cook_time: self.cook_time,
                servings: self.servings,
            }),
            (user_id, recipe_id, title) => {
                let missing: Vec<&str> = [
                    ("userId", user_id.is_none()),
                    ("recipeId", recipe_id.is_none()),
                    ("title", title.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(AppError::missing_fields(format!(
                    "Missing required fields: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Favorites routes handler
pub struct FavoritesRoutes;

impl FavoritesRoutes {
    /// Create all favorites routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(FAVORITES_PATH, post(Self::handle_create))
            .route(&format!("{FAVORITES_PATH}/:user_id"), get(Self::handle_list))
            .route(
                &format!("{FAVORITES_PATH}/:user_id/:recipe_id"),
                delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    fn manager(resources: &Arc<ServerResources>) -> FavoritesManager {
        resources.database.favorites()
    }

    /// Handle POST /api/favorites - Store a favorite
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<CreateFavoriteBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(body) = body.map_err(|e| AppError::new(ErrorCode::InvalidFormat, e.body_text()))?;
        let request = body.validate()?;

        let favorite = Self::manager(&resources).create(&request).await?;
        info!(user_id = %favorite.user_id, recipe_id = %favorite.recipe_id, "Favorite added");

        Ok((StatusCode::CREATED, Json(favorite)).into_response())
    }

    /// Handle GET /api/favorites/:userId - List a user's favorites
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let favorites = Self::manager(&resources).list_for_user(&user_id).await?;
        Ok((StatusCode::OK, Json(favorites)).into_response())
    }

    /// Handle DELETE /api/favorites/:userId/:recipeId - Remove a favorite
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, recipe_id)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let removed = Self::manager(&resources)
            .delete(&user_id, &recipe_id)
            .await?;
        info!(%user_id, %recipe_id, removed, "Favorite removed");

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
