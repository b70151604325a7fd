// ABOUTME: Canonical recipe and category shapes produced by catalog normalization
// ABOUTME: Serialized with camelCase keys to match the favorites wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A catalog record normalized for display
///
/// Values are ephemeral: built per fetch and held only in view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Catalog identifier, never empty
    pub id: String,
    /// Recipe name, empty when the catalog omits it
    pub title: String,
    /// Truncated instructions preview
    pub description: String,
    /// Thumbnail URL, empty when absent
    pub image: String,
    /// Always the `N/A` placeholder; the catalog has no such field
    pub cook_time: String,
    /// Always the `N/A` placeholder; the catalog has no such field
    pub servings: String,
    /// Catalog category or `N/A`
    pub category: String,
    /// Cuisine area or `N/A`
    pub area: String,
    /// Measure immediately followed by ingredient name, in slot order
    pub ingredients: Vec<String>,
    /// Non-blank instruction lines, in order
    pub instructions: Vec<String>,
    /// The raw catalog record, verbatim
    pub original_data: Value,
}

/// One entry of the catalog's category list
///
/// `id` is the 1-based position in the list as fetched and is not stable
/// across fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Positional identifier
    pub id: u32,
    /// Category name, also the filter key
    pub name: String,
    /// Thumbnail URL
    pub image: String,
    /// Free-text description
    pub description: String,
}
