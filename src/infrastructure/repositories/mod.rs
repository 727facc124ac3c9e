//! Repository Implementations
//!
//! SQLite implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **SqliteUserRepository** - User lookups plus save/update/delete
//! - **SqlitePostRepository** - Post lookups plus save/update/delete
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::SqlitePool;
//! use web_api::infrastructure::repositories::{SqlitePostRepository, SqliteUserRepository};
//!
//! fn setup_repositories(pool: SqlitePool) {
//!     let user_repo = SqliteUserRepository::new(pool.clone());
//!     let post_repo = SqlitePostRepository::new(pool);
//! }
//! ```

pub mod post_repository;
pub mod user_repository;

pub use post_repository::SqlitePostRepository;
pub use user_repository::SqliteUserRepository;
