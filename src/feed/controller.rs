// ABOUTME: Home screen controller owning the view state updated by feed batches
// ABOUTME: Runs the initial concurrent load and the sequential category re-fetch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

use mealbook_core::constants::catalog::HOME_FEED_RECIPE_COUNT;
use mealbook_core::models::{Category, Recipe};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::{load_home_feed, recipes_for_category};
use crate::catalog::RecipeSource;

/// What the home screen renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    /// Category the recipe list is filtered by, once known
    pub selected_category: Option<String>,
    /// Catalog categories
    pub categories: Vec<Category>,
    /// Recipe list
    pub recipes: Vec<Recipe>,
    /// Featured recipe
    pub featured: Option<Recipe>,
    /// A load batch is in flight
    pub is_loading: bool,
    /// A user-initiated refresh is in flight
    pub is_refreshing: bool,
}

/// Single owner of the home screen's [`ViewState`]
///
/// Batches are not cancelled and carry no generation token: when two
/// batches overlap, whichever settles last overwrites the recipe list.
pub struct HomeController<S: ?Sized> {
    source: Arc<S>,
    recipe_count: usize,
    state: RwLock<ViewState>,
}

impl<S> HomeController<S>
where
    S: RecipeSource + ?Sized,
{
    /// Create a controller with empty view state
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            recipe_count: HOME_FEED_RECIPE_COUNT,
            state: RwLock::new(ViewState::default()),
        }
    }

    /// Override how many random recipes a load requests
    #[must_use]
    pub const fn with_recipe_count(mut self, recipe_count: usize) -> Self {
        self.recipe_count = recipe_count;
        self
    }

    /// Copy of the current view state
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Run the concurrent home batch and publish it once every call settles
    pub async fn load(&self) {
        self.state.write().await.is_loading = true;

        let feed = load_home_feed(self.source.as_ref(), self.recipe_count).await;

        let mut state = self.state.write().await;
        if state.selected_category.is_none() {
            state.selected_category = feed.categories.first().map(|c| c.name.clone());
        }
        info!(
            categories = feed.categories.len(),
            recipes = feed.recipes.len(),
            featured = feed.featured.is_some(),
            "Home feed loaded"
        );
        state.categories = feed.categories;
        state.recipes = feed.recipes;
        state.featured = feed.featured;
        state.is_loading = false;
    }

    /// Pull-to-refresh: a full [`Self::load`] flagged as a refresh
    pub async fn refresh(&self) {
        self.state.write().await.is_refreshing = true;
        self.load().await;
        self.state.write().await.is_refreshing = false;
    }

    /// Record the selection, then replace the recipe list with that category's recipes
    pub async fn select_category(&self, category: &str) {
        self.state.write().await.selected_category = Some(category.to_owned());

        let recipes = recipes_for_category(self.source.as_ref(), category).await;

        info!(category, recipes = recipes.len(), "Category recipes loaded");
        self.state.write().await.recipes = recipes;
    }
}
