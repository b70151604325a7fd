// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration; no configuration files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Configuration module for the Mealbook backend and catalog client

/// Environment and server configuration
pub mod environment;

pub use environment::{ClientConfig, Environment, LogLevel, ServerConfig};
