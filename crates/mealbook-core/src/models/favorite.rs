// ABOUTME: Favorite recipe records persisted by the backend
// ABOUTME: Includes the validated creation payload sent by clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Recipe;

/// A user-scoped persisted reference to a recipe
///
/// The pair (`user_id`, `recipe_id`) identifies a favorite at the
/// application level; `id` is the storage row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Storage row identifier
    pub id: i64,
    /// Caller-supplied user identity
    pub user_id: String,
    /// Catalog recipe identifier
    pub recipe_id: String,
    /// Recipe title at the time it was saved
    pub title: String,
    /// Recipe thumbnail URL
    pub image: Option<String>,
    /// Display cook time
    pub cook_time: Option<String>,
    /// Display servings
    pub servings: Option<String>,
    /// When the favorite was stored
    pub created_at: DateTime<Utc>,
}

/// Payload for storing a new favorite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    /// Caller-supplied user identity
    pub user_id: String,
    /// Catalog recipe identifier
    pub recipe_id: String,
    /// Recipe title
    pub title: String,
    /// Recipe thumbnail URL
    pub image: Option<String>,
    /// Display cook time
    pub cook_time: Option<String>,
    /// Display servings
    pub servings: Option<String>,
}

impl NewFavorite {
    /// Build the payload that saves `recipe` for `user_id`
    #[must_use]
    pub fn from_recipe(user_id: impl Into<String>, recipe: &Recipe) -> Self {
        Self {
            user_id: user_id.into(),
            recipe_id: recipe.id.clone(),
            title: recipe.title.clone(),
            image: Some(recipe.image.clone()).filter(|image| !image.is_empty()),
            cook_time: Some(recipe.cook_time.clone()),
            servings: Some(recipe.servings.clone()),
        }
    }
}
