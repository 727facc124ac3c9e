//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool, migrations and seed (SQLite)
//! - Repository implementations over the database
//! - Gateway repositories over the external placeholder API
//! - Prometheus metrics

pub mod database;
pub mod gateway;
pub mod metrics;
pub mod repositories;
