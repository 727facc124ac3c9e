//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, MethodRouter},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(user_routes())
        .merge(post_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// GET-only route; every other method gets a 405.
///
/// `get` would also answer HEAD, so HEAD is routed to the 405 handler explicitly.
fn read_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: axum::handler::Handler<T, AppState>,
    T: 'static,
{
    get(handler)
        .head(handlers::method_not_allowed)
        .fallback(handlers::method_not_allowed)
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", read_only(handlers::user::get_all_users))
        .route("/users/", read_only(handlers::user::get_user_without_id))
        .route("/users/{*user_id}", read_only(handlers::user::get_user))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", read_only(handlers::post::get_all_posts))
        .route("/posts/", read_only(handlers::post::get_post_without_id))
        .route("/posts/{*post_id}", read_only(handlers::post::get_post))
}
