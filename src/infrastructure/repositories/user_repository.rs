//! User Repository Implementation
//!
//! SQLite implementation of the UserRepository trait.
//! Maps between the database schema and domain User entity.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{Email, User, UserId, UserRepository};
use crate::shared::error::AppError;

/// Database row representation of the users table.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    username: String,
    email: String,
}

impl UserRow {
    /// Convert database row to domain User entity.
    ///
    /// Stored values are re-validated; a malformed row is an error, not a
    /// silent pass-through.
    fn into_user(self) -> Result<User, AppError> {
        let id = UserId::new(self.id)?;
        let email = Email::new(&self.email)?;
        Ok(User::new(id, self.name, self.username, email))
    }
}

/// SQLite user repository implementation.
///
/// Lookups go through [`UserRepository`]; the write operations are inherent
/// methods and are not reachable from the HTTP surface.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SqliteUserRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user with the entity's ID.
    pub async fn save(&self, user: &User) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (id, name, username, email) VALUES (?1, ?2, ?3, ?4)")
            .bind(user.id().value())
            .bind(user.name())
            .bind(user.username())
            .bind(user.email().as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::Conflict("User with this id, email or username already exists".to_string())
                }
                _ => AppError::Database(e),
            })?;

        Ok(())
    }

    /// Overwrite an existing user's fields.
    pub async fn update(&self, user: &User) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?2,
                username = ?3,
                email = ?4,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1
            "#,
        )
        .bind(user.id().value())
        .bind(user.name())
        .bind(user.username())
        .bind(user.email().as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", user.id())));
        }

        Ok(())
    }

    /// Delete a user (hard delete).
    pub async fn delete(&self, id: UserId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, username, email FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, username, email FROM users WHERE id = ?1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, username, email FROM users WHERE email = ?1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }
}
