//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod health;
pub mod post;
pub mod user;

use crate::shared::error::AppError;

/// Answer for any method other than GET on a resource route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
