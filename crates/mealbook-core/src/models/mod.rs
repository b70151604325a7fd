// ABOUTME: Canonical data models shared by the catalog client and the favorites backend
// ABOUTME: Re-exports Recipe, Category and Favorite types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! # Data Models
//!
//! - `Recipe`: a catalog record normalized for display
//! - `Category`: one entry of the catalog's category list
//! - `Favorite`: a user-scoped persisted reference to a recipe

mod favorite;
mod recipe;

pub use favorite::{Favorite, NewFavorite};
pub use recipe::{Category, Recipe};
