//! User Service
//!
//! Turns raw identifiers into value objects and applies the not-found policy
//! to user lookups.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Email, User, UserId, UserRepository, ValidationError};
use crate::shared::error::AppError;

/// User service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get every user
    async fn get_all_users(&self) -> Result<Vec<User>, UserError>;

    /// Get user by raw ID string (as taken from a path segment)
    async fn get_user_by_id(&self, id: &str) -> Result<User, UserError>;

    /// Get user by raw email string
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError>;
}

/// User service errors
///
/// Callers can tell a missing user apart from a failed lookup.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Replace a storage failure with a generic message, logging the cause.
fn lookup_failed(message: &'static str) -> impl FnOnce(AppError) -> UserError {
    move |e| {
        tracing::error!(error = %e, "{}", message);
        UserError::Internal(message.into())
    }
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn get_all_users(&self) -> Result<Vec<User>, UserError> {
        self.user_repo
            .find_all()
            .await
            .map_err(lookup_failed("failed to get users"))
    }

    async fn get_user_by_id(&self, id: &str) -> Result<User, UserError> {
        let id: UserId = id.parse()?;

        self.user_repo
            .find_by_id(id)
            .await
            .map_err(lookup_failed("failed to get user"))?
            .ok_or(UserError::NotFound)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        let email = Email::new(email)?;

        self.user_repo
            .find_by_email(&email)
            .await
            .map_err(lookup_failed("failed to get user"))?
            .ok_or(UserError::NotFound)
    }
}
