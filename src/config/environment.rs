// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Environment-based configuration management for production deployment

use crate::catalog::MealDbClientConfig;
use anyhow::{bail, Context, Result};
use mealbook_core::constants::{catalog, server};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Favorites storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx SQLite URL, e.g. `sqlite:./data/mealbook.db` or `sqlite::memory:`
    pub url: String,
}

/// Recipe catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog base URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Cross-origin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

/// Keep-alive job configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepAliveConfig {
    /// URL pinged periodically; the job is disabled without it
    pub url: Option<String>,
    /// Seconds between pings
    pub interval_secs: u64,
}

impl KeepAliveConfig {
    /// Period between pings
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Application log level
    pub log_level: LogLevel,
    /// Favorites storage
    pub database: DatabaseConfig,
    /// Cross-origin access
    pub cors: CorsConfig,
    /// Keep-alive job
    pub keepalive: KeepAliveConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not parseable, or
    /// if the keep-alive interval is zero
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env::var("PORT").or_else(|_| env::var("HTTP_PORT")) {
            Ok(port) => port.trim().parse::<u16>().context("Invalid PORT value")?,
            Err(_) => server::DEFAULT_HTTP_PORT,
        };

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let keepalive_interval_secs = env_parse_or(
            "KEEPALIVE_INTERVAL_SECS",
            server::DEFAULT_KEEPALIVE_INTERVAL_SECS,
        )?;
        if keepalive_interval_secs == 0 {
            bail!("KEEPALIVE_INTERVAL_SECS must be at least 1");
        }

        let config = Self {
            http_port,
            host: env_var_or("HOST", "0.0.0.0"),
            environment,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", server::DEFAULT_DATABASE_URL),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            keepalive: KeepAliveConfig {
                url: env::var("API_URL").ok().filter(|url| !url.trim().is_empty()),
                interval_secs: keepalive_interval_secs,
            },
        };

        Ok(config)
    }

    /// Whether the keep-alive job should run
    #[must_use]
    pub const fn keepalive_enabled(&self) -> bool {
        self.environment.is_production() && self.keepalive.url.is_some()
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Mealbook Server Configuration:\n\
             - Address: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - Keep-alive: {}",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            if self.database.url.contains(":memory:") {
                "SQLite (in-memory)"
            } else {
                "SQLite"
            },
            self.cors.allowed_origins,
            if self.keepalive_enabled() {
                format!("every {}s", self.keepalive.interval_secs)
            } else {
                "disabled".to_owned()
            },
        )
    }
}

/// Catalog client configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Recipe catalog
    pub catalog: CatalogConfig,
    /// Base URL of the favorites backend
    pub api_url: String,
}

impl ClientConfig {
    /// Load client configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not parseable
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            catalog: CatalogConfig {
                base_url: env_var_or("MEALDB_BASE_URL", catalog::DEFAULT_BASE_URL),
                timeout_secs: env_parse_or("MEALDB_TIMEOUT_SECS", catalog::DEFAULT_TIMEOUT_SECS)?,
            },
            api_url: env_var_or(
                "MEALBOOK_API_URL",
                &format!("http://localhost:{}", server::DEFAULT_HTTP_PORT),
            ),
        })
    }

    /// Catalog client settings derived from this configuration
    #[must_use]
    pub fn catalog_client_config(&self) -> MealDbClientConfig {
        MealDbClientConfig {
            base_url: self.catalog.base_url.clone(),
            timeout_secs: self.catalog.timeout_secs,
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value")),
        Err(_) => Ok(default),
    }
}
