//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;

use crate::domain::value_objects::{Email, UserId};
use crate::shared::error::AppError;

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: INTEGER PRIMARY KEY
/// - name: TEXT NOT NULL
/// - username: TEXT NOT NULL UNIQUE
/// - email: TEXT NOT NULL UNIQUE
///
/// Instances are read-only snapshots; every read re-fetches from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    username: String,
    email: Email,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, username: impl Into<String>, email: Email) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            email,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// Repository trait for User lookups.
///
/// Implementations of this trait handle the actual storage interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
/// An absent user is `Ok(None)`, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user, ordered by ID.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError>;

    /// Find a user by email address.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new(
            UserId::new(1).unwrap(),
            "John Doe",
            "johndoe",
            Email::new("john@example.com").unwrap(),
        )
    }

    #[test]
    fn test_user_accessors() {
        let user = create_test_user();

        assert_eq!(user.id().value(), 1);
        assert_eq!(user.name(), "John Doe");
        assert_eq!(user.username(), "johndoe");
        assert_eq!(user.email().as_str(), "john@example.com");
        assert_eq!(user.email().domain(), "example.com");
    }

    #[test]
    fn test_user_clone_is_equal() {
        let user = create_test_user();
        assert_eq!(user.clone(), user);
    }
}
