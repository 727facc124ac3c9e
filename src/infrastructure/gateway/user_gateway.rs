//! User lookups against the placeholder API.

use async_trait::async_trait;

use super::client::PlaceholderClient;
use super::dto::UserPayload;
use crate::domain::{Email, User, UserId, UserRepository};
use crate::shared::error::AppError;

/// [`UserRepository`] backed by `GET /users`.
#[derive(Clone)]
pub struct JsonPlaceholderUserGateway {
    client: PlaceholderClient,
}

impl JsonPlaceholderUserGateway {
    pub fn new(client: PlaceholderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for JsonPlaceholderUserGateway {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let payloads: Vec<UserPayload> = self.client.get_json("/users", &[]).await?;

        payloads
            .into_iter()
            .map(|p| p.into_user().map_err(AppError::from))
            .collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        let payload: Option<UserPayload> = self
            .client
            .get_optional_json(&format!("/users/{id}"))
            .await?;

        payload.map(|p| p.into_user().map_err(AppError::from)).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError> {
        let payloads: Vec<UserPayload> = self
            .client
            .get_json("/users", &[("email", email.as_str())])
            .await?;

        payloads
            .into_iter()
            .next()
            .map(|p| p.into_user().map_err(AppError::from))
            .transpose()
    }
}
