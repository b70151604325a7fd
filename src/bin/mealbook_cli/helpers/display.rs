// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors
// ABOUTME: Output formatting helpers for the mealbook CLI
// ABOUTME: Renders command results as pretty-printed JSON on stdout

use mealbook::errors::AppResult;
use serde::Serialize;

/// Print `value` as pretty JSON followed by a newline
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
