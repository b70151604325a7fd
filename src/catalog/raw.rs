// ABOUTME: Raw, schema-less catalog records and response envelopes
// ABOUTME: Every field is optional; accessors treat null and non-string values as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Raw catalog payloads
//!
//! The catalog owns this schema and changes it without notice, so records
//! are kept as an untyped JSON object and read through optional accessors.
//! Validation happens once, in [`super::normalize`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// One meal record exactly as the catalog returned it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMeal(Map<String, Value>);

impl RawMeal {
    /// Wrap an already-parsed JSON object
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from a JSON value; anything but an object yields `None`
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// String field by key, `None` when missing, `null` or not a string
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// `idMeal`; numeric ids are accepted and rendered as text
    #[must_use]
    pub fn id(&self) -> Option<Cow<'_, str>> {
        match self.0.get("idMeal")? {
            Value::String(id) => Some(Cow::Borrowed(id.as_str())),
            Value::Number(id) => Some(Cow::Owned(id.to_string())),
            _ => None,
        }
    }

    /// `strMeal`
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text("strMeal")
    }

    /// `strMealThumb`
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.text("strMealThumb")
    }

    /// `strCategory`
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.text("strCategory")
    }

    /// `strArea`
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.text("strArea")
    }

    /// `strInstructions`
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.text("strInstructions")
    }

    /// `strIngredient{slot}`
    #[must_use]
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.text(&format!("strIngredient{slot}"))
    }

    /// `strMeasure{slot}`
    #[must_use]
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.text(&format!("strMeasure{slot}"))
    }

    /// The record as a JSON value
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// One entry of `categories.php`
///
/// The catalog-side `idCategory` is not read; display ids are positional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    /// Category name
    #[serde(rename = "strCategory", default)]
    pub name: Option<String>,
    /// Thumbnail URL
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    /// Free-text description
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

impl RawCategory {
    /// Read an entry leniently; non-string fields count as absent and
    /// anything but an object yields `None`
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_owned);
        Some(Self {
            name: text("strCategory"),
            thumbnail: text("strCategoryThumb"),
            description: text("strCategoryDescription"),
        })
    }
}

/// `{ "meals": [...] | null }`
///
/// Entries stay untyped so one malformed element drops only itself.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<Value>>,
}

impl MealsEnvelope {
    /// Object entries as records, skipping `null` and other non-objects
    pub(crate) fn into_meals(self) -> Vec<RawMeal> {
        self.meals
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawMeal::from_value)
            .collect()
    }
}

/// `{ "categories": [...] | null }`
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    categories: Option<Vec<Value>>,
}

impl CategoriesEnvelope {
    /// Object entries as categories, skipping non-objects
    pub(crate) fn into_categories(self) -> Vec<RawCategory> {
        self.categories
            .unwrap_or_default()
            .iter()
            .filter_map(RawCategory::from_value)
            .collect()
    }
}
