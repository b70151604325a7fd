// ABOUTME: Logging configuration and structured logging setup for the server and CLI
// ABOUTME: Builds a tracing subscriber with noise filtering and json, pretty or compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

//! Structured logging configuration

use anyhow::{anyhow, Result};
use mealbook_core::constants::server;
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for deployed services
    Json,
    /// Human-readable multi-field output
    Pretty,
    /// One short line per event
    Compact,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Where formatted events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Server processes log to stdout
    Stdout,
    /// The CLI keeps stdout for its JSON output
    Stderr,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive string
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Output stream
    pub target: LogTarget,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment name
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            target: LogTarget::Stdout,
            include_location: false,
            include_spans: false,
            service_name: server::SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: env::var("LOG_FORMAT")
                .map(|v| LogFormat::from_str_or_default(&v))
                .unwrap_or(LogFormat::Pretty),
            target: LogTarget::Stdout,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| server::SERVICE_NAME.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Same as [`Self::from_env`] but quiet by default and written to stderr
    #[must_use]
    pub fn for_cli() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            format: LogFormat::Compact,
            target: LogTarget::Stderr,
            service_name: "mealbook-cli".into(),
            ..Self::from_env()
        }
    }

    /// Build the filter: the configured level plus fixed noise reduction for dependencies
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let noise = [
            ("hyper", "warn"),
            ("hyper_util", "warn"),
            ("reqwest", "warn"),
            ("sqlx", "warn"),
            ("tower_http", "info"),
        ];

        let mut filter = EnvFilter::new(&self.level);
        for (target, level) in noise {
            if self.level.contains(target) {
                continue;
            }
            filter = filter.add_directive(directive(&format!("{target}={level}")));
        }
        if !self.level.contains('=') {
            filter = filter.add_directive(directive(&format!("mealbook={}", self.level)));
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let result = match (self.format, self.target) {
            (LogFormat::Json, LogTarget::Stdout) => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_span_events(span_events)
                        .with_writer(io::stdout),
                )
                .try_init(),
            (LogFormat::Json, LogTarget::Stderr) => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_span_events(span_events)
                        .with_writer(io::stderr),
                )
                .try_init(),
            (LogFormat::Pretty, LogTarget::Stdout) => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_span_events(span_events)
                        .with_writer(io::stdout),
                )
                .try_init(),
            (LogFormat::Pretty, LogTarget::Stderr) => registry
                .with(fmt::layer().with_span_events(span_events).with_writer(io::stderr))
                .try_init(),
            (LogFormat::Compact, LogTarget::Stdout) => registry
                .with(fmt::layer().compact().with_target(false).with_writer(io::stdout))
                .try_init(),
            (LogFormat::Compact, LogTarget::Stderr) => registry
                .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
                .try_init(),
        };
        result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        if self.target == LogTarget::Stdout {
            self.log_startup_info();
        }
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Mealbook starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "spans": self.include_spans
            }
        });
        info!("Logging configured: {}", config_summary);
    }
}

fn directive(raw: &str) -> Directive {
    raw.parse()
        .unwrap_or_else(|_| tracing::Level::INFO.into())
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
