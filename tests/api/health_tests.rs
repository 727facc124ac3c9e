//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{body_json, body_text, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_returns_alive() {
    let app = TestApp::new().await;

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_database() {
    let app = TestApp::new().await;

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_ne!(body["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_readiness_unavailable_when_store_closed() {
    let app = TestApp::new().await;
    app.db.close().await;

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["status"], "unhealthy");
}

#[tokio::test]
async fn test_metrics_exposes_request_counters() {
    let app = TestApp::new().await;
    app.get("/users").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("web_api_http_requests_total"));
}
