//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Post, User};

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Post response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id().value(),
            user_id: post.user_id().value(),
            title: post.title().to_string(),
            body: post.body().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Email, PostId, UserId};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_user_response_fields() {
        let user = User::new(
            UserId::new(2).unwrap(),
            "Jane Smith",
            "janesmith",
            Email::new("jane@example.com").unwrap(),
        );

        let value = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 2,
                "name": "Jane Smith",
                "username": "janesmith",
                "email": "jane@example.com"
            })
        );
    }

    #[test]
    fn test_post_response_uses_user_id_camel_case() {
        let post = Post::new(PostId::new(1).unwrap(), UserId::new(1).unwrap(), "First Post", "body");

        let value = serde_json::to_value(PostResponse::from(&post)).unwrap();

        assert_eq!(
            value,
            json!({ "id": 1, "userId": 1, "title": "First Post", "body": "body" })
        );
    }
}
