//! End-to-end API integration tests
//!
//! These tests drive the full stack through the HTTP router:
//! - Customer add, get, list, update and delete
//! - Validation failures surfacing as 400 with the rule's message
//! - Empty results surfacing as 204

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use customers_api::api::{router, AppState};
use customers_api::application::build_mediator;
use customers_api::config::AppConfig;
use customers_api::infrastructure::DbContext;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

/// Setup test application over a fresh in-memory store
fn setup_app() -> Router {
    let mediator = build_mediator(Arc::new(DbContext::new())).expect("valid bindings");
    router(AppState::new(mediator, AppConfig::default()))
}

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn add_customer(app: &Router, name: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/customers", &json!({ "name": name })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&body_bytes(response).await[..], b"OK");
}

#[tokio::test]
async fn test_add_returns_bad_request_for_empty_name() {
    let app = setup_app();

    let response = app
        .oneshot(json_request("POST", "/customers", &json!({ "name": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "name must not be empty");
}

#[tokio::test]
async fn test_add_returns_bad_request_for_missing_name() {
    let app = setup_app();

    let response = app
        .oneshot(json_request("POST", "/customers", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_returns_first_id() {
    let app = setup_app();

    let json = add_customer(&app, "Acme").await;

    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn test_get_returns_no_content_when_missing() {
    let app = setup_app();

    let response = app.oneshot(empty_request("GET", "/customers/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_get_returns_bad_request_for_zero_id() {
    let app = setup_app();

    let response = app.oneshot(empty_request("GET", "/customers/0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "id must be greater than zero");
}

#[tokio::test]
async fn test_get_returns_customer() {
    let app = setup_app();
    add_customer(&app, "Acme").await;

    let response = app.oneshot(empty_request("GET", "/customers/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["customer"]["id"], 1);
    assert_eq!(json["customer"]["name"], "Acme");
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found_with_error_body() {
    let app = setup_app();

    for method in ["GET", "DELETE"] {
        let response = app
            .clone()
            .oneshot(empty_request(method, "/customers/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "customer id must be an integer");
    }

    let response = app
        .oneshot(json_request("PUT", "/customers/abc", &json!({ "name": "Initech" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_returns_no_content_when_empty() {
    let app = setup_app();

    let response = app.oneshot(empty_request("GET", "/customers")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_returns_customers() {
    let app = setup_app();
    add_customer(&app, "Acme").await;
    add_customer(&app, "Globex").await;

    let response = app.oneshot(empty_request("GET", "/customers")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let customers = json["customers"].as_array().unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[1]["name"], "Globex");
}

#[tokio::test]
async fn test_delete_returns_bad_request_for_zero_id() {
    let app = setup_app();

    let response = app.oneshot(empty_request("DELETE", "/customers/0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "id must be greater than zero");
}

#[tokio::test]
async fn test_delete_missing_customer_is_ok() {
    let app = setup_app();

    let response = app.oneshot(empty_request("DELETE", "/customers/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_removes_customer() {
    let app = setup_app();
    add_customer(&app, "Acme").await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/customers/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(empty_request("GET", "/customers/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_missing_customer_is_ok() {
    let app = setup_app();

    let response = app
        .oneshot(json_request("PUT", "/customers/1", &json!({ "name": "Initech" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_with_short_name_is_bad_request() {
    let app = setup_app();
    add_customer(&app, "Acme").await;

    let response = app
        .oneshot(json_request("PUT", "/customers/1", &json!({ "name": "Ac" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "name must be at least 3 characters");
}

#[tokio::test]
async fn test_add_update_get_flow() {
    let app = setup_app();

    // Step 1: Add
    add_customer(&app, "Acme").await;

    // Step 2: Update
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/customers/1", &json!({ "name": "Acme Corp" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Step 3: Get reflects the update
    let response = app.oneshot(empty_request("GET", "/customers/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["customer"]["name"], "Acme Corp");
}

#[tokio::test]
async fn test_overlong_name_is_internal_error_without_detail() {
    let app = setup_app();
    let name = "x".repeat(300);

    let response = app
        .oneshot(json_request("POST", "/customers", &json!({ "name": name })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "internal server error");
}

#[tokio::test]
async fn test_development_exposes_fault_detail() {
    let mediator = build_mediator(Arc::new(DbContext::new())).unwrap();
    let config = AppConfig::from_lookup(|key| (key == "APP_ENV").then(|| "development".to_string())).unwrap();
    let app = router(AppState::new(mediator, config));

    let response = app
        .oneshot(json_request("POST", "/customers", &json!({ "name": "x".repeat(300) })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("constraint violated on name"));
}
