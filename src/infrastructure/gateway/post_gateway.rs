//! Post lookups against the placeholder API.

use async_trait::async_trait;

use super::client::PlaceholderClient;
use super::dto::PostPayload;
use crate::domain::{Post, PostId, PostRepository, UserId};
use crate::shared::error::AppError;

/// [`PostRepository`] backed by `GET /posts`.
#[derive(Clone)]
pub struct JsonPlaceholderPostGateway {
    client: PlaceholderClient,
}

impl JsonPlaceholderPostGateway {
    pub fn new(client: PlaceholderClient) -> Self {
        Self { client }
    }
}

fn into_posts(payloads: Vec<PostPayload>) -> Result<Vec<Post>, AppError> {
    payloads
        .into_iter()
        .map(|p| p.into_post().map_err(AppError::from))
        .collect()
}

#[async_trait]
impl PostRepository for JsonPlaceholderPostGateway {
    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let payloads = self.client.get_json("/posts", &[]).await?;
        into_posts(payloads)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, AppError> {
        let payload: Option<PostPayload> = self
            .client
            .get_optional_json(&format!("/posts/{id}"))
            .await?;

        payload.map(|p| p.into_post().map_err(AppError::from)).transpose()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Post>, AppError> {
        let user_id = user_id.to_string();
        let payloads = self
            .client
            .get_json("/posts", &[("userId", user_id.as_str())])
            .await?;
        into_posts(payloads)
    }
}
