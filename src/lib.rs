//! # Web API Library
//!
//! A read-only Users/Posts HTTP service with:
//! - RESTful HTTP API endpoints
//! - SQLite for persistent storage, seeded with sample data
//! - An optional JSONPlaceholder-compatible upstream in place of the store
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, value objects and repository traits
//! - **Application Layer**: Use-case services and response DTOs
//! - **Infrastructure Layer**: Database, external gateway and metrics
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! web_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects and traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ SQLite, HTTP gateway and metrics implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common error type
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
