//! Post API Tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, body_text, TestApp};

#[tokio::test]
async fn test_list_posts_returns_seeded_posts() {
    let app = TestApp::new().await;

    let response = app.get("/posts").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["id"], 1);
    assert_eq!(posts[2]["userId"], 2);
}

#[tokio::test]
async fn test_get_post_uses_camel_case_owner_field() {
    let app = TestApp::new().await;

    let response = app.get("/posts/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["userId"], json!(1));
    assert_eq!(body["title"], json!("First Post"));
    assert!(body.get("user_id").is_none());
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/posts/42").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Post not found");
}

#[tokio::test]
async fn test_malformed_post_id_is_internal_error() {
    let app = TestApp::new().await;

    let response = app.get("/posts/abc").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Failed to fetch post");
}

#[tokio::test]
async fn test_empty_post_id_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.get("/posts/").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Post ID required");
}

#[tokio::test]
async fn test_post_to_collection_is_rejected() {
    let app = TestApp::new().await;

    let response = app.request(Method::POST, "/posts").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_text(response).await, "Method not allowed");
}

#[tokio::test]
async fn test_head_is_rejected() {
    let app = TestApp::new().await;

    for uri in ["/posts", "/posts/1"] {
        let response = app.request(Method::HEAD, uri).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
    }
}

#[tokio::test]
async fn test_whole_suffix_is_the_post_id() {
    let app = TestApp::new().await;

    for uri in ["/posts/1/", "/posts/1/2"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body_text(response).await, "Failed to fetch post");
    }
}
