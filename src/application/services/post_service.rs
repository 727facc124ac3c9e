//! Post Service
//!
//! Handles post lookups.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Post, PostId, PostRepository, UserId, ValidationError};
use crate::shared::error::AppError;

/// Post service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostService: Send + Sync {
    /// Get every post
    async fn get_all_posts(&self) -> Result<Vec<Post>, PostError>;

    /// Get post by raw ID string
    async fn get_post_by_id(&self, id: &str) -> Result<Post, PostError>;

    /// Get posts written by the user with the given raw ID string
    async fn get_posts_by_user_id(&self, user_id: &str) -> Result<Vec<Post>, PostError>;
}

/// Post service errors
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("post not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn lookup_failed(message: &'static str) -> impl FnOnce(AppError) -> PostError {
    move |e| {
        tracing::error!(error = %e, "{}", message);
        PostError::Internal(message.into())
    }
}

/// PostService implementation
pub struct PostServiceImpl<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> PostServiceImpl<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }
}

#[async_trait]
impl<P> PostService for PostServiceImpl<P>
where
    P: PostRepository + 'static,
{
    async fn get_all_posts(&self) -> Result<Vec<Post>, PostError> {
        self.post_repo
            .find_all()
            .await
            .map_err(lookup_failed("failed to get posts"))
    }

    async fn get_post_by_id(&self, id: &str) -> Result<Post, PostError> {
        let id: PostId = id.parse()?;

        self.post_repo
            .find_by_id(id)
            .await
            .map_err(lookup_failed("failed to get post"))?
            .ok_or(PostError::NotFound)
    }

    async fn get_posts_by_user_id(&self, user_id: &str) -> Result<Vec<Post>, PostError> {
        let user_id: UserId = user_id.parse()?;

        self.post_repo
            .find_by_user_id(user_id)
            .await
            .map_err(lookup_failed("failed to get posts"))
    }
}
