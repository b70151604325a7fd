// ABOUTME: Pure mapping from raw catalog records to the canonical Recipe and Category shapes
// ABOUTME: Applies the fixed ingredient slot scan, instruction splitting and description preview
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Recipe normalization
//!
//! Normalization is a partial function: an absent record, or one without a
//! usable `idMeal`, produces no [`Recipe`]. Everything else degrades to
//! placeholders instead of failing.

use mealbook_core::constants::catalog::{
    DESCRIPTION_PREVIEW_CHARS, DESCRIPTION_SUFFIX, INGREDIENT_SLOT_LIMIT, NOT_AVAILABLE,
};
use mealbook_core::models::{Category, Recipe};

use super::raw::{RawCategory, RawMeal};

/// Map one raw catalog record into a [`Recipe`]
#[must_use]
pub fn normalize(raw: Option<&RawMeal>) -> Option<Recipe> {
    let raw = raw?;
    let id = raw.id().filter(|id| !id.trim().is_empty())?.into_owned();
    let instructions = raw.instructions().filter(|text| !text.is_empty());

    Some(Recipe {
        id,
        title: raw.name().unwrap_or_default().to_owned(),
        description: instructions.map(describe).unwrap_or_default(),
        image: raw.thumbnail().unwrap_or_default().to_owned(),
        cook_time: NOT_AVAILABLE.to_owned(),
        servings: NOT_AVAILABLE.to_owned(),
        category: or_placeholder(raw.category()),
        area: or_placeholder(raw.area()),
        ingredients: ingredient_lines(raw),
        instructions: instructions.map(instruction_steps).unwrap_or_default(),
        original_data: raw.to_value(),
    })
}

/// Normalize a batch, dropping records that normalize to nothing
#[must_use]
pub fn normalize_all(raws: &[RawMeal]) -> Vec<Recipe> {
    raws.iter().filter_map(|raw| normalize(Some(raw))).collect()
}

/// Assign 1-based positional ids to the catalog's category list
#[must_use]
pub fn transform_categories(raws: Vec<RawCategory>) -> Vec<Category> {
    (1..)
        .zip(raws)
        .map(|(id, raw)| Category {
            id,
            name: raw.name.unwrap_or_default(),
            image: raw.thumbnail.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
        })
        .collect()
}

/// Slots `1..=INGREDIENT_SLOT_LIMIT`; measure text is glued to the name unseparated
fn ingredient_lines(raw: &RawMeal) -> Vec<String> {
    (1..=INGREDIENT_SLOT_LIMIT)
        .filter_map(|slot| {
            let name = raw.ingredient(slot)?.trim();
            if name.is_empty() {
                return None;
            }
            let measure = raw.measure(slot).map_or("", str::trim);
            Some(format!("{measure}{name}"))
        })
        .collect()
}

fn instruction_steps(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn describe(text: &str) -> String {
    let mut preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str(DESCRIPTION_SUFFIX);
    preview
}

fn or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_owned()
}
