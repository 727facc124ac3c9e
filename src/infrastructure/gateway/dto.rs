//! Wire shapes of the placeholder API.
//!
//! Unknown fields (address, company, ...) are ignored.

use serde::Deserialize;

use crate::domain::{Email, Post, PostId, User, UserId, ValidationError};

#[derive(Debug, Deserialize)]
pub(super) struct UserPayload {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl UserPayload {
    pub fn into_user(self) -> Result<User, ValidationError> {
        let id = UserId::new(self.id)?;
        let email = Email::new(&self.email)?;
        Ok(User::new(id, self.name, self.username, email))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostPayload {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl PostPayload {
    pub fn into_post(self) -> Result<Post, ValidationError> {
        let id = PostId::new(self.id)?;
        let user_id = UserId::new(self.user_id)?;
        Ok(Post::new(id, user_id, self.title, self.body))
    }
}
