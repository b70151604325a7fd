// ABOUTME: Integration tests for the TheMealDB client against a local stub server
// ABOUTME: Verifies endpoint/query mapping and fail-soft behavior on errors and bad payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealbook Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::catalog_stub::{closed_port_url, CatalogStub, StubMode};
use mealbook::catalog::{MealDbClient, MealDbClientConfig, RecipeSource};

#[tokio::test]
async fn test_queries_hit_expected_endpoints() {
    let stub = CatalogStub::start(StubMode::Healthy).await;
    let client = stub.client();

    client.search_by_name("Arrabiata").await;
    client.lookup_by_id("52772").await;
    client.random().await;
    client.filter_by_category("Seafood").await;
    client.filter_by_ingredient("chicken_breast").await;
    client.list_categories().await;

    assert_eq!(
        stub.requests(),
        vec![
            "search.php?s=Arrabiata",
            "lookup.php?i=52772",
            "random.php?",
            "filter.php?c=Seafood",
            "filter.php?i=chicken_breast",
            "categories.php?",
        ]
    );
}

#[tokio::test]
async fn test_healthy_payloads_are_returned_raw() {
    let stub = CatalogStub::start(StubMode::Healthy).await;
    let client = stub.client();

    let found = client.search_by_name("tomato").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), Some("tomato pasta"));

    let meal = client.lookup_by_id("52772").await.unwrap();
    assert_eq!(meal.id().as_deref(), Some("52772"));

    let filtered = client.filter_by_category("Seafood").await;
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].category(), None);

    let categories = client.list_categories().await;
    assert_eq!(categories[0].name.as_deref(), Some("Beef"));
}

#[tokio::test]
async fn test_malformed_entries_drop_only_themselves() {
    let stub = CatalogStub::start(StubMode::Malformed).await;
    let client = stub.client();

    let found = client.search_by_name("tomato").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id().as_deref(), Some("52771"));

    let meal = client.lookup_by_id("52772").await.unwrap();
    assert_eq!(meal.name(), Some("Looked up"));

    assert_eq!(client.filter_by_category("Seafood").await.len(), 2);

    let categories = client.list_categories().await;
    let names: Vec<_> = categories.iter().map(|c| c.name.as_deref()).collect();
    assert_eq!(names, vec![Some("Beef"), Some("Chicken")]);
    assert_eq!(
        categories[1].thumbnail.as_deref(),
        Some("https://img.example/chicken.png")
    );
}

#[tokio::test]
async fn test_null_meals_mean_no_match() {
    let stub = CatalogStub::start(StubMode::NoMatches).await;
    let client = stub.client();

    assert!(client.search_by_name("zzz").await.is_empty());
    assert!(client.random().await.is_none());
    assert!(client.list_categories().await.is_empty());
}

#[tokio::test]
async fn test_lookup_of_unknown_id_is_absent() {
    let stub = CatalogStub::start(StubMode::Healthy).await;
    assert!(stub.client().lookup_by_id("0").await.is_none());
}

#[tokio::test]
async fn test_server_errors_become_empty_results() {
    let stub = CatalogStub::start(StubMode::ServerError).await;
    let client = stub.client();

    assert!(client.search_by_name("pasta").await.is_empty());
    assert!(client.lookup_by_id("52772").await.is_none());
    assert!(client.random().await.is_none());
    assert!(client.filter_by_category("Seafood").await.is_empty());
    assert!(client.list_categories().await.is_empty());
}

#[tokio::test]
async fn test_unparseable_bodies_become_empty_results() {
    let stub = CatalogStub::start(StubMode::Garbage).await;
    let client = stub.client();

    assert!(client.filter_by_ingredient("salt").await.is_empty());
    assert!(client.random().await.is_none());
}

#[tokio::test]
async fn test_unreachable_catalog_becomes_empty_results() {
    let client = MealDbClient::new(MealDbClientConfig {
        base_url: closed_port_url().await,
        timeout_secs: 2,
    })
    .unwrap();

    assert!(client.search_by_name("pasta").await.is_empty());
    assert!(client.lookup_by_id("52772").await.is_none());
    assert!(client.list_categories().await.is_empty());
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let stub = CatalogStub::start(StubMode::Healthy).await;
    let client = MealDbClient::new(MealDbClientConfig {
        base_url: format!("{}/", stub.base_url()),
        timeout_secs: 5,
    })
    .unwrap();

    assert!(client.random().await.is_some());
}
