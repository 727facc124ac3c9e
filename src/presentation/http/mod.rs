//! HTTP API
//!
//! Read-only REST endpoints for users and posts, plus health and metrics.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
