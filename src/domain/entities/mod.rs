//! # Domain Entities
//!
//! Core domain entities assembled from value objects.
//!
//! ## Entities
//!
//! - **User**: User account with display name, username and email
//! - **Post**: Text post owned by a user
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining lookup operations.
//! These traits are implemented in the infrastructure layer (SQLite store and
//! the external placeholder API), following the dependency inversion principle.

mod post;
mod user;

pub use post::{Post, PostRepository};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use post::MockPostRepository;
#[cfg(test)]
pub use user::MockUserRepository;
