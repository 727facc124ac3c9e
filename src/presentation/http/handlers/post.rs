//! Post Handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::application::dto::PostResponse;
use crate::application::services::PostError;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `GET /posts`
pub async fn get_all_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = state.post_service.get_all_posts().await.map_err(|e| {
        tracing::warn!(error = %e, "Listing posts failed");
        AppError::Internal("Failed to fetch posts".into())
    })?;

    Ok(Json(posts.iter().map(PostResponse::from).collect()))
}

/// `GET /posts/{id}`
///
/// The ID is everything after the prefix, so `/posts/1/extra` is looked up as
/// `1/extra` and fails like any other malformed ID.
pub async fn get_post(
    State(state): State<AppState>,
    post_id: Result<Path<String>, PathRejection>,
) -> Result<Json<PostResponse>, AppError> {
    let Path(post_id) = post_id.map_err(|e| {
        tracing::warn!(error = %e, "Undecodable post ID");
        AppError::Internal("Failed to fetch post".into())
    })?;
    fetch_post(&state, &post_id).await
}

/// `GET /posts/` - item route with an empty ID segment
pub async fn get_post_without_id(
    State(state): State<AppState>,
) -> Result<Json<PostResponse>, AppError> {
    fetch_post(&state, "").await
}

async fn fetch_post(state: &AppState, post_id: &str) -> Result<Json<PostResponse>, AppError> {
    if post_id.is_empty() {
        return Err(AppError::BadRequest("Post ID required".into()));
    }

    let post = state
        .post_service
        .get_post_by_id(post_id)
        .await
        .map_err(|e| match e {
            PostError::NotFound => AppError::NotFound("Post not found".into()),
            e => {
                tracing::warn!(error = %e, post_id, "Fetching post failed");
                AppError::Internal("Failed to fetch post".into())
            }
        })?;

    Ok(Json(PostResponse::from(&post)))
}
