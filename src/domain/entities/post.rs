//! Post entity and repository trait.
//!
//! Maps to the `posts` table in the database schema.

use async_trait::async_trait;

use crate::domain::value_objects::{PostId, UserId};
use crate::shared::error::AppError;

/// A post written by a user.
///
/// Maps to the `posts` table:
/// - id: INTEGER PRIMARY KEY
/// - user_id: INTEGER NOT NULL REFERENCES users(id)
/// - title: TEXT NOT NULL
/// - body: TEXT NOT NULL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    user_id: UserId,
    title: String,
    body: String,
}

impl Post {
    pub fn new(id: PostId, user_id: UserId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    /// ID of the owning user. A reference, not ownership.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Repository trait for Post lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every post, ordered by ID.
    async fn find_all(&self) -> Result<Vec<Post>, AppError>;

    /// Find a post by ID.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, AppError>;

    /// Find all posts written by a user. An unknown user yields an empty list.
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Post>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_accessors() {
        let post = Post::new(
            PostId::new(3).unwrap(),
            UserId::new(2).unwrap(),
            "Jane's Post",
            "This is Jane's first post.",
        );

        assert_eq!(post.id().value(), 3);
        assert_eq!(post.user_id().value(), 2);
        assert_eq!(post.title(), "Jane's Post");
        assert_eq!(post.body(), "This is Jane's first post.");
    }
}
