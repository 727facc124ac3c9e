//! External Gateway
//!
//! Alternate repository implementations backed by a JSONPlaceholder-compatible
//! REST API instead of the local store. They return the same entities as the
//! SQLite repositories and can be swapped in at composition time.

mod client;
mod dto;
pub mod post_gateway;
pub mod user_gateway;

pub use client::PlaceholderClient;
pub use post_gateway::JsonPlaceholderPostGateway;
pub use user_gateway::JsonPlaceholderUserGateway;
