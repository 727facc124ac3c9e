//! Startup Seed
//!
//! Inserts a fixed set of users and posts when the store is empty.

use sqlx::SqlitePool;

use crate::shared::error::AppError;

struct SeedUser {
    name: &'static str,
    username: &'static str,
    email: &'static str,
}

/// `owner` indexes into [`SEED_USERS`] by creation order.
struct SeedPost {
    owner: usize,
    title: &'static str,
    body: &'static str,
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        name: "John Doe",
        username: "johndoe",
        email: "john@example.com",
    },
    SeedUser {
        name: "Jane Smith",
        username: "janesmith",
        email: "jane@example.com",
    },
];

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        owner: 0,
        title: "First Post",
        body: "This is the content of the first post.",
    },
    SeedPost {
        owner: 0,
        title: "Second Post",
        body: "This is the content of the second post.",
    },
    SeedPost {
        owner: 1,
        title: "Jane's Post",
        body: "This is Jane's first post.",
    },
];

/// Result of a seed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Store was empty; seed rows were inserted.
    Seeded { users: usize, posts: usize },
    /// At least one user already existed; nothing was written.
    AlreadyPresent,
}

/// Seed the store once.
///
/// Runs in a single transaction gated by a count of `users`, so calling it
/// again after any user exists is a no-op.
pub async fn seed_data(pool: &SqlitePool) -> Result<SeedOutcome, AppError> {
    let mut tx = pool.begin().await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *tx)
        .await?;

    if count > 0 {
        tracing::info!(existing_users = count, "Data already exists, skipping seed");
        return Ok(SeedOutcome::AlreadyPresent);
    }

    let mut user_ids = Vec::with_capacity(SEED_USERS.len());
    for user in SEED_USERS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, username, email) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(user.name)
        .bind(user.username)
        .bind(user.email)
        .fetch_one(&mut *tx)
        .await?;
        user_ids.push(id);
    }

    for post in SEED_POSTS {
        let user_id = user_ids.get(post.owner).copied().ok_or_else(|| {
            AppError::Internal(format!("seed post '{}' references unknown user", post.title))
        })?;

        sqlx::query("INSERT INTO posts (user_id, title, body) VALUES (?1, ?2, ?3)")
            .bind(user_id)
            .bind(post.title)
            .bind(post.body)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!(
        users = SEED_USERS.len(),
        posts = SEED_POSTS.len(),
        "Initial data seeded"
    );

    Ok(SeedOutcome::Seeded {
        users: SEED_USERS.len(),
        posts: SEED_POSTS.len(),
    })
}
