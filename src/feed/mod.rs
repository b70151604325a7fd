// ABOUTME: Aggregation layer assembling display models from concurrent catalog queries
// ABOUTME: Fans out independent fail-soft calls, waits for all, and normalizes the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! # Recipe Feed Aggregation
//!
//! Batches are fire-and-await-all: every call in a batch is issued before
//! any is awaited, and nothing is published until the whole batch settles.
//! Because each [`RecipeSource`] call is fail-soft, a failed call only
//! empties its own section of the result.

/// Single-owner view state for the home screen
pub mod controller;

use futures_util::future::join_all;
use mealbook_core::models::{Category, Recipe};
use serde::Serialize;

use crate::catalog::{normalize, normalize_all, transform_categories, RawMeal, RecipeSource};

pub use controller::{HomeController, ViewState};

/// Home screen display model
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeFeed {
    /// Catalog categories with positional ids
    pub categories: Vec<Category>,
    /// Random recipe selection
    pub recipes: Vec<Recipe>,
    /// One additional random recipe
    pub featured: Option<Recipe>,
}

/// Issue `count` concurrent random-meal calls and keep the ones that returned
pub async fn random_meals<S>(source: &S, count: usize) -> Vec<RawMeal>
where
    S: RecipeSource + ?Sized,
{
    join_all((0..count).map(|_| source.random()))
        .await
        .into_iter()
        .flatten()
        .collect()
}

/// Fetch categories, `count` random recipes and a featured recipe concurrently
pub async fn load_home_feed<S>(source: &S, count: usize) -> HomeFeed
where
    S: RecipeSource + ?Sized,
{
    let (categories, meals, featured) = tokio::join!(
        source.list_categories(),
        random_meals(source, count),
        source.random(),
    );

    HomeFeed {
        categories: transform_categories(categories),
        recipes: normalize_all(&meals),
        featured: normalize(featured.as_ref()),
    }
}

/// Recipes listed under `category`
pub async fn recipes_for_category<S>(source: &S, category: &str) -> Vec<Recipe>
where
    S: RecipeSource + ?Sized,
{
    normalize_all(&source.filter_by_category(category).await)
}

/// Recipes using `ingredient`
pub async fn recipes_with_ingredient<S>(source: &S, ingredient: &str) -> Vec<Recipe>
where
    S: RecipeSource + ?Sized,
{
    normalize_all(&source.filter_by_ingredient(ingredient).await)
}

/// Recipes whose name matches `query`
pub async fn search_recipes<S>(source: &S, query: &str) -> Vec<Recipe>
where
    S: RecipeSource + ?Sized,
{
    normalize_all(&source.search_by_name(query).await)
}

/// Full details of one recipe
pub async fn recipe_details<S>(source: &S, id: &str) -> Option<Recipe>
where
    S: RecipeSource + ?Sized,
{
    normalize(source.lookup_by_id(id).await.as_ref())
}

/// One random recipe
pub async fn random_recipe<S>(source: &S) -> Option<Recipe>
where
    S: RecipeSource + ?Sized,
{
    normalize(source.random().await.as_ref())
}
