//! E2E tests using the mock Backand server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use backand::mock_server::{Fixtures, MockServer, MockState};
use backand::{
    Access, BackandObject, Create, Credentials, Get, List, PageParams,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    name: String,
    #[serde(default)]
    price: f64,
}

impl BackandObject for Item {
    const OBJECT_TYPE: &'static str = "items";
    type Id = u64;
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    server.shutdown().await;

    // After shutdown, requests fail but are still returned as values
    let token = client.get_token().await;
    assert!(!token.is_success());
    assert_eq!(token.status(), None);
}

// =============================================================================
// Token Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_token_then_authenticated_reads() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let token = client.get_token().await;
    assert!(token.body().get("access_token").is_some());
    assert!(token.body().get("token_type").is_some());

    let page = client
        .get_object_list("items", PageParams::new(2, 2), Access::Authenticated)
        .await
        .unwrap();
    assert!(page.is_success());
    assert_eq!(page.body()["totalRows"], 3);
    assert_eq!(page.body()["data"][0]["name"], "Gizmo");

    let single = client
        .get_single_object("items", "1", Access::Authenticated)
        .await
        .unwrap();
    assert_eq!(single.body()["name"], "Widget");

    server.shutdown().await;
}

#[tokio::test]
async fn test_wrong_password_returns_grant_error() {
    let server = MockServer::start().await;
    let credentials =
        Credentials::new(Fixtures::USERNAME, "wrong", Fixtures::APP_NAME, Fixtures::ANONYMOUS_TOKEN)
            .unwrap();
    let client = server.client_with(credentials).unwrap();

    let token = client.get_token().await;

    assert_eq!(token.status(), Some(400));
    assert_eq!(token.body()["error"], "invalid_grant");
    assert!(!client.is_authenticated());

    server.shutdown().await;
}

#[tokio::test]
async fn test_authenticated_read_before_token_is_rejected() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let response = client
        .get_object_list("items", PageParams::default(), Access::Authenticated)
        .await
        .unwrap();

    assert_eq!(response.status(), Some(401));
    assert!(response.body()["message"].is_string());

    server.shutdown().await;
}

// =============================================================================
// Object Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_create_then_get_object() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let created = client
        .create_object("profiles", Fixtures::profile("Ada", "Lovelace"))
        .await
        .unwrap();
    assert!(created.is_success());
    assert!(client.is_authenticated(), "create obtains a token first");

    let id = created.body()["id"].to_string();
    let fetched = client
        .get_single_object("profiles", &id, Access::Anonymous)
        .await
        .unwrap();

    assert_eq!(fetched.body()["firstName"], "Ada");
    assert_eq!(fetched.body()["email"], "ada@example.com");

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_with_raw_json_text() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let created = client
        .create_object("items", r#"{"name":"Doohickey","price":1.5}"#)
        .await
        .unwrap();
    assert_eq!(created.body()["id"], 4);

    let state = server.state();
    assert_eq!(state.read().await.collection("items").unwrap().len(), 4);

    server.shutdown().await;
}

#[tokio::test]
async fn test_missing_object_returns_error_body() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let response = client
        .get_single_object("items", "999", Access::Anonymous)
        .await
        .unwrap();

    assert_eq!(response.status(), Some(404));
    assert!(response.body()["message"]
        .as_str()
        .unwrap()
        .contains("999"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_object_type() {
    let server = MockServer::start().await;
    let client = server.client().unwrap();

    let response = client
        .create_object("nonexistent", json!({"a": 1}))
        .await
        .unwrap();

    assert_eq!(response.status(), Some(404));

    server.shutdown().await;
}

// =============================================================================
// Typed Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_typed_create_list_get() {
    let state = MockState::new(Fixtures::APP_NAME, Fixtures::ANONYMOUS_TOKEN)
        .with_user(Fixtures::USERNAME, Fixtures::PASSWORD)
        .with_collection("items");
    let server = MockServer::with_state(state).await;
    let client = server.client().unwrap();

    for name in ["alpha", "beta", "gamma"] {
        let item = Item {
            id: None,
            name: name.to_string(),
            price: 2.0,
        };
        let created = item.create(&client).await.unwrap();
        assert!(created.id.is_some());
    }

    let first = Item::list_page(&client, PageParams::new(2, 1), Access::Anonymous)
        .await
        .unwrap();
    assert_eq!(first.len(), 2);
    assert!(first.has_more());

    let second = Item::list_page(&client, PageParams::new(2, 2), Access::Authenticated)
        .await
        .unwrap();
    assert_eq!(second.len(), 1);
    assert!(!second.has_more());

    let gamma = Item::get(&client, 3, Access::Anonymous).await.unwrap();
    assert_eq!(gamma.name, "gamma");

    server.shutdown().await;
}
