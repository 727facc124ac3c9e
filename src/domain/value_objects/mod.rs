//! # Domain Value Objects
//!
//! Immutable, self-validating wrappers around primitives.
//!
//! ## Value Objects
//!
//! - **UserId / PostId**: positive integer identifiers
//! - **Email**: `local@domain.tld` address with a derived domain

mod email;
mod error;
mod post_id;
mod user_id;

pub use email::*;
pub use error::*;
pub use post_id::*;
pub use user_id::*;
