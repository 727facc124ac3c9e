//! Data Transfer Objects
//!
//! DTOs for API response serialization.

pub mod response;

pub use response::{PostResponse, UserResponse};
