// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors
// ABOUTME: Re-exports command modules for the mealbook CLI
// ABOUTME: Catalog browsing and favorites management

pub mod catalog;
pub mod favorites;
