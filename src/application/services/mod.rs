//! Application Services
//!
//! Use-case services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: User lookups
//! - **PostService**: Post lookups

pub mod post_service;
pub mod user_service;

// Re-export user service types
pub use user_service::{UserError, UserService, UserServiceImpl};

// Re-export post service types
pub use post_service::{PostError, PostService, PostServiceImpl};

#[cfg(test)]
pub use post_service::MockPostService;
#[cfg(test)]
pub use user_service::MockUserService;
