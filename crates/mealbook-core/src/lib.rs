// ABOUTME: Core types and constants for the Mealbook recipe platform
// ABOUTME: Foundation crate with error handling, canonical models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

#![deny(unsafe_code)]

//! # Mealbook Core
//!
//! Foundation crate providing shared types and constants for the Mealbook
//! recipe platform. Both the favorites backend and the catalog client depend
//! on it, so it is kept free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Catalog schema bounds, placeholders and defaults
//! - **models**: Canonical `Recipe`, `Category` and `Favorite` shapes

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Canonical data models shared by the client and the backend
pub mod models;
