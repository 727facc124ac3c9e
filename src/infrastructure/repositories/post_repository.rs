//! Post Repository Implementation
//!
//! SQLite implementation of the PostRepository trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{Post, PostId, PostRepository, UserId};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i64,
    user_id: i64,
    title: String,
    body: String,
}

impl PostRow {
    fn into_post(self) -> Result<Post, AppError> {
        let id = PostId::new(self.id)?;
        let user_id = UserId::new(self.user_id)?;
        Ok(Post::new(id, user_id, self.title, self.body))
    }
}

/// SQLite post repository implementation.
#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a post with the entity's ID. The owning user must exist.
    pub async fn save(&self, post: &Post) -> Result<(), AppError> {
        sqlx::query("INSERT INTO posts (id, user_id, title, body) VALUES (?1, ?2, ?3, ?4)")
            .bind(post.id().value())
            .bind(post.user_id().value())
            .bind(post.title())
            .bind(post.body())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::Conflict(format!("Post with id {} already exists", post.id()))
                }
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::BadRequest(format!("User with id {} does not exist", post.user_id()))
                }
                _ => AppError::Database(e),
            })?;

        Ok(())
    }

    pub async fn update(&self, post: &Post) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET user_id = ?2,
                title = ?3,
                body = ?4,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            "#,
        )
        .bind(post.id().value())
        .bind(post.user_id().value())
        .bind(post.title())
        .bind(post.body())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Post with id {} not found", post.id())));
        }

        Ok(())
    }

    pub async fn delete(&self, id: PostId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Post with id {} not found", id)));
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, user_id, title, body FROM posts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PostRow::into_post).collect()
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, user_id, title, body FROM posts WHERE id = ?1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PostRow::into_post).transpose()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, user_id, title, body FROM posts WHERE user_id = ?1 ORDER BY id",
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PostRow::into_post).collect()
    }
}
