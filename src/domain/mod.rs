//! # Domain Layer
//!
//! The domain layer contains the core model of the service.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Domain entities (User, Post) and their repository traits
//! - **value_objects**: Immutable value types (UserId, PostId, Email)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Value objects cannot exist in an invalid state
//! - Repository traits define data access contracts

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
