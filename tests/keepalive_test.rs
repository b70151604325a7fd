// ABOUTME: Integration tests for the keep-alive job
// ABOUTME: Runs the schedule against a local counter endpoint and checks failures do not stop it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use helpers::catalog_stub::closed_port_url;
use mealbook::errors::ErrorCode;
use mealbook::jobs::KeepAliveJob;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::net::TcpListener;

async fn counting_server(status: StatusCode) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route(
            "/api/health",
            get(move |State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                status
            }),
        )
        .with_state(Arc::clone(&hits));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}/api/health"), hits)
}

#[tokio::test]
async fn test_ping_once_reports_status() {
    let (url, hits) = counting_server(StatusCode::OK).await;
    let job = KeepAliveJob::new(url, Duration::from_secs(840)).unwrap();

    assert_eq!(job.ping_once().await.unwrap(), StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_schedule_pings_repeatedly_until_shutdown() {
    let (url, hits) = counting_server(StatusCode::OK).await;
    let handle = KeepAliveJob::new(url, Duration::from_millis(50))
        .unwrap()
        .spawn();

    tokio::time::sleep(Duration::from_millis(275)).await;
    handle.shutdown().await;
    let after_shutdown = hits.load(Ordering::SeqCst);

    assert!(after_shutdown >= 2, "expected repeated pings, got {after_shutdown}");
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(hits.load(Ordering::SeqCst), after_shutdown);
}

#[tokio::test]
async fn test_first_ping_waits_one_period() {
    let (url, hits) = counting_server(StatusCode::OK).await;
    let handle = KeepAliveJob::new(url, Duration::from_secs(60)).unwrap().spawn();

    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.shutdown().await;

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_error_statuses_do_not_stop_schedule() {
    let (url, hits) = counting_server(StatusCode::SERVICE_UNAVAILABLE).await;
    let handle = KeepAliveJob::new(url, Duration::from_millis(50))
        .unwrap()
        .spawn();

    tokio::time::sleep(Duration::from_millis(275)).await;
    handle.shutdown().await;

    assert!(hits.load(Ordering::SeqCst) >= 2);
}

#[tokio::test]
async fn test_unreachable_target_is_reported_not_fatal() {
    let job = KeepAliveJob::new(closed_port_url().await, Duration::from_millis(50)).unwrap();
    assert!(job.ping_once().await.is_err());

    let handle = job.spawn();
    tokio::time::sleep(Duration::from_millis(150)).await;
    handle.shutdown().await;
}

#[tokio::test]
async fn test_zero_period_is_rejected_before_spawning() {
    let error = KeepAliveJob::new("http://127.0.0.1:9/api/health", Duration::ZERO)
        .err()
        .expect("zero period must be rejected");

    assert_eq!(error.code, ErrorCode::ConfigError);
}
