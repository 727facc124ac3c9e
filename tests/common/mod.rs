//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

use web_api::config::DatabaseSettings;
use web_api::infrastructure::database;
use web_api::infrastructure::repositories::{SqlitePostRepository, SqliteUserRepository};
use web_api::presentation::http::create_router;
use web_api::startup::AppState;

/// Test application backed by a seeded in-memory store
pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = database::create_pool(&DatabaseSettings::in_memory())
            .await
            .expect("in-memory pool");
        database::run_migrations(&db).await.expect("migrations");
        database::seed_data(&db).await.expect("seed data");

        let state = AppState::with_repositories(
            db.clone(),
            Arc::new(SqliteUserRepository::new(db.clone())),
            Arc::new(SqlitePostRepository::new(db.clone())),
        );

        Self {
            router: create_router(state),
            db,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri).await
    }

    /// Make a bodyless request with an arbitrary method
    pub async fn request(&self, method: Method, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Collect a response body as text
pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
