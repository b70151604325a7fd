// ABOUTME: Keep-alive job issuing a GET to the public API URL on a fixed period
// ABOUTME: Logs each outcome; failures never stop the schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

use mealbook_core::errors::{AppError, AppResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

const PING_TIMEOUT_SECS: u64 = 30;

/// Periodic GET against the service's own public URL
#[derive(Debug, Clone)]
pub struct KeepAliveJob {
    url: String,
    period: Duration,
    http: Client,
}

/// Running job; dropping the handle also ends the schedule
pub struct KeepAliveHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl KeepAliveHandle {
    /// Stop the schedule and wait for the task to finish
    pub async fn shutdown(self) {
        // A send error means the task has already exited
        let _ = self.shutdown_tx.send(()).await;
        if let Err(e) = self.task.await {
            warn!(error = %e, "Keep-alive task ended abnormally");
        }
    }
}

impl KeepAliveJob {
    /// Create a job pinging `url` every `period`
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is zero or the HTTP client cannot be built
    pub fn new(url: impl Into<String>, period: Duration) -> AppResult<Self> {
        if period.is_zero() {
            return Err(AppError::config("Keep-alive period must be non-zero"));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(PING_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build keep-alive client: {e}")))?;

        Ok(Self {
            url: url.into(),
            period,
            http,
        })
    }

    /// Issue a single ping and return the response status
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or times out
    pub async fn ping_once(&self) -> AppResult<StatusCode> {
        let response = self.http.get(&self.url).send().await?;
        Ok(response.status())
    }

    /// Start the schedule; the first ping happens one period after start
    #[must_use]
    pub fn spawn(self) -> KeepAliveHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        info!(url = %self.url, period_secs = self.period.as_secs(), "Keep-alive job started");

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + self.period, self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => self.tick().await,
                    _ = shutdown_rx.recv() => {
                        debug!("Keep-alive job received shutdown signal");
                        break;
                    }
                }
            }
        });

        KeepAliveHandle { shutdown_tx, task }
    }

    async fn tick(&self) {
        match self.ping_once().await {
            Ok(status) if status.is_success() => {
                info!(url = %self.url, status = status.as_u16(), "Keep-alive ping succeeded");
            }
            Ok(status) => {
                warn!(url = %self.url, status = status.as_u16(), "Keep-alive ping returned non-success status");
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "Keep-alive ping failed");
            }
        }
    }
}
