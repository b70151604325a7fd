// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors
// ABOUTME: Favorites commands for the mealbook CLI
// ABOUTME: Talks to the backend through FavoritesClient; add looks the recipe up first

use crate::helpers::display::print_json;
use mealbook::{
    catalog::RecipeSource,
    client::FavoritesClient,
    errors::{AppError, AppResult},
    feed,
};
use serde_json::json;
use tracing::info;

pub async fn list(client: &FavoritesClient, user_id: &str) -> AppResult<()> {
    print_json(&client.list(user_id).await?)
}

pub async fn add<S: RecipeSource>(
    client: &FavoritesClient,
    source: &S,
    user_id: &str,
    recipe_id: &str,
) -> AppResult<()> {
    let recipe = feed::recipe_details(source, recipe_id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;

    let favorite = client.add_recipe(user_id, &recipe).await?;
    info!(user_id, recipe_id, "Favorite saved");
    print_json(&favorite)
}

pub async fn remove(client: &FavoritesClient, user_id: &str, recipe_id: &str) -> AppResult<()> {
    client.remove(user_id, recipe_id).await?;
    print_json(&json!({ "userId": user_id, "recipeId": recipe_id, "removed": true }))
}

pub async fn check(client: &FavoritesClient, user_id: &str, recipe_id: &str) -> AppResult<()> {
    let is_favorite = client.is_favorite(user_id, recipe_id).await?;
    print_json(&json!({ "userId": user_id, "recipeId": recipe_id, "isFavorite": is_favorite }))
}
