// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors
// ABOUTME: Helper modules for the mealbook CLI
// ABOUTME: Output formatting

pub mod display;
