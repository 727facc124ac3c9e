//! User API Tests

use axum::http::{header, Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, body_text, TestApp};

#[tokio::test]
async fn test_list_users_returns_seeded_users_in_id_order() {
    let app = TestApp::new().await;

    let response = app.get("/users").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        body_json(response).await,
        json!([
            {"id": 1, "name": "John Doe", "username": "johndoe", "email": "john@example.com"},
            {"id": 2, "name": "Jane Smith", "username": "janesmith", "email": "jane@example.com"}
        ])
    );
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::new().await;

    let response = app.get("/users/2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["username"], "janesmith");
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/users/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "User not found");
}

#[tokio::test]
async fn test_malformed_user_id_is_internal_error() {
    let app = TestApp::new().await;

    for uri in ["/users/abc", "/users/0", "/users/-4"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body_text(response).await, "Failed to fetch user");
    }
}

#[tokio::test]
async fn test_empty_user_id_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.get("/users/").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "User ID required");
}

#[tokio::test]
async fn test_non_get_methods_are_rejected() {
    let app = TestApp::new().await;

    for (method, uri) in [
        (Method::POST, "/users"),
        (Method::PUT, "/users/1"),
        (Method::DELETE, "/users/1"),
    ] {
        let response = app.request(method, uri).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_text(response).await, "Method not allowed");
    }
}

#[tokio::test]
async fn test_head_is_rejected() {
    let app = TestApp::new().await;

    for uri in ["/users", "/users/1"] {
        let response = app.request(Method::HEAD, uri).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
    }
}

#[tokio::test]
async fn test_whole_suffix_is_the_user_id() {
    let app = TestApp::new().await;

    for uri in ["/users/1/extra", "/users/1/", "/users/%FF"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body_text(response).await, "Failed to fetch user");
    }
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = TestApp::new().await;
    app.db.close().await;

    let response = app.get("/users").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Failed to fetch users");
}
