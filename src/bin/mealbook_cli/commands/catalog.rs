// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors
// ABOUTME: Catalog browsing commands for the mealbook CLI
// ABOUTME: Each command runs one aggregation-layer query and prints its normalized result

use crate::helpers::display::print_json;
use mealbook::{
    catalog::{transform_categories, RecipeSource},
    errors::{AppError, AppResult},
    feed,
};

pub async fn home<S: RecipeSource>(source: &S, count: usize) -> AppResult<()> {
    print_json(&feed::load_home_feed(source, count).await)
}

pub async fn search<S: RecipeSource>(source: &S, query: &str) -> AppResult<()> {
    print_json(&feed::search_recipes(source, query).await)
}

pub async fn lookup<S: RecipeSource>(source: &S, id: &str) -> AppResult<()> {
    let recipe = feed::recipe_details(source, id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
    print_json(&recipe)
}

pub async fn random<S: RecipeSource>(source: &S) -> AppResult<()> {
    let recipe = feed::random_recipe(source)
        .await
        .ok_or_else(|| AppError::not_found("Random recipe"))?;
    print_json(&recipe)
}

pub async fn category<S: RecipeSource>(source: &S, name: &str) -> AppResult<()> {
    print_json(&feed::recipes_for_category(source, name).await)
}

pub async fn ingredient<S: RecipeSource>(source: &S, name: &str) -> AppResult<()> {
    print_json(&feed::recipes_with_ingredient(source, name).await)
}

pub async fn categories<S: RecipeSource>(source: &S) -> AppResult<()> {
    print_json(&transform_categories(source.list_categories().await))
}
