// ABOUTME: Database operations for user favorite recipes
// ABOUTME: Create, list and delete favorites keyed by (user_id, recipe_id)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

use chrono::{DateTime, Utc};
use mealbook_core::errors::{AppError, AppResult};
use mealbook_core::models::{Favorite, NewFavorite};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

/// Favorites database operations manager
pub struct FavoritesManager {
    pool: SqlitePool,
}

impl FavoritesManager {
    /// Create a new favorites manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a favorite
    ///
    /// Duplicate (user, recipe) pairs are not rejected; the pair is only
    /// meaningful to [`Self::delete`].
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn create(&self, request: &NewFavorite) -> AppResult<Favorite> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO favorites (user_id, recipe_id, title, image, cook_time, servings, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&request.user_id)
        .bind(&request.recipe_id)
        .bind(&request.title)
        .bind(&request.image)
        .bind(&request.cook_time)
        .bind(&request.servings)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create favorite: {e}")))?;

        let id = result.last_insert_rowid();
        debug!(id, user_id = %request.user_id, recipe_id = %request.recipe_id, "Favorite stored");

        Ok(Favorite {
            id,
            user_id: request.user_id.clone(),
            recipe_id: request.recipe_id.clone(),
            title: request.title.clone(),
            image: request.image.clone(),
            cook_time: request.cook_time.clone(),
            servings: request.servings.clone(),
            created_at: now,
        })
    }

    /// All favorites of a user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Favorite>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, recipe_id, title, image, cook_time, servings, created_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list favorites: {e}")))?;

        rows.iter().map(row_to_favorite).collect()
    }

    /// Delete every favorite matching the pair; returns how many rows went away
    ///
    /// Deleting a pair that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, user_id: &str, recipe_id: &str) -> AppResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM favorites
            WHERE user_id = $1 AND recipe_id = $2
            ",
        )
        .bind(user_id)
        .bind(recipe_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete favorite: {e}")))?;

        Ok(result.rows_affected())
    }

    /// Count favorites of a user
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn count_for_user(&self, user_id: &str) -> AppResult<i64> {
        let row = sqlx::query(
            r"
            SELECT COUNT(*) as count FROM favorites
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count favorites: {e}")))?;

        Ok(row.get("count"))
    }
}

/// Convert a database row to a Favorite struct
fn row_to_favorite(row: &SqliteRow) -> AppResult<Favorite> {
    let created_at_str: String = row.get("created_at");

    Ok(Favorite {
        id: row.get("id"),
        user_id: row.get("user_id"),
        recipe_id: row.get("recipe_id"),
        title: row.get("title"),
        image: row.get("image"),
        cook_time: row.get("cook_time"),
        servings: row.get("servings"),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
