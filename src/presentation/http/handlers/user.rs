//! User Handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::application::dto::UserResponse;
use crate::application::services::UserError;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `GET /users`
pub async fn get_all_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.get_all_users().await.map_err(|e| {
        tracing::warn!(error = %e, "Listing users failed");
        AppError::Internal("Failed to fetch users".into())
    })?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// `GET /users/{id}`
///
/// The ID is everything after the prefix, so `/users/1/extra` is looked up as
/// `1/extra` and fails like any other malformed ID.
pub async fn get_user(
    State(state): State<AppState>,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Path(user_id) = user_id.map_err(|e| {
        tracing::warn!(error = %e, "Undecodable user ID");
        AppError::Internal("Failed to fetch user".into())
    })?;
    fetch_user(&state, &user_id).await
}

/// `GET /users/` - item route with an empty ID segment
pub async fn get_user_without_id(
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    fetch_user(&state, "").await
}

async fn fetch_user(state: &AppState, user_id: &str) -> Result<Json<UserResponse>, AppError> {
    if user_id.is_empty() {
        return Err(AppError::BadRequest("User ID required".into()));
    }

    let user = state
        .user_service
        .get_user_by_id(user_id)
        .await
        .map_err(|e| match e {
            UserError::NotFound => AppError::NotFound("User not found".into()),
            // Malformed IDs fall through to 500 along with storage failures.
            e => {
                tracing::warn!(error = %e, user_id, "Fetching user failed");
                AppError::Internal("Failed to fetch user".into())
            }
        })?;

    Ok(Json(UserResponse::from(&user)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use sqlx::SqlitePool;

    use super::*;
    use crate::application::services::{MockPostService, MockUserService};
    use crate::domain::{Email, User, UserId};

    fn state_with(user_service: MockUserService) -> AppState {
        let db = SqlitePool::connect_lazy("sqlite::memory:").unwrap();
        AppState::new(db, Arc::new(user_service), Arc::new(MockPostService::new()))
    }

    #[tokio::test]
    async fn test_get_user_maps_service_result() {
        let mut service = MockUserService::new();
        service
            .expect_get_user_by_id()
            .withf(|id| id == "7")
            .returning(|_| {
                Ok(User::new(
                    UserId::new(7).unwrap(),
                    "Ada",
                    "ada",
                    Email::new("ada@example.com").unwrap(),
                ))
            });

        let Json(body) = get_user(State(state_with(service)), Ok(Path("7".into())))
            .await
            .unwrap();

        assert_eq!(body.id, 7);
        assert_eq!(body.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_not_found_becomes_404() {
        let mut service = MockUserService::new();
        service
            .expect_get_user_by_id()
            .returning(|_| Err(UserError::NotFound));

        let err = get_user(State(state_with(service)), Ok(Path("9".into())))
            .await
            .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_internal_failure_becomes_500() {
        let mut service = MockUserService::new();
        service
            .expect_get_all_users()
            .returning(|| Err(UserError::Internal("failed to get users".into())));

        let err = get_all_users(State(state_with(service))).await.unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_empty_id_never_reaches_service() {
        let service = MockUserService::new();

        let err = get_user_without_id(State(state_with(service))).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref m) if m == "User ID required"));
    }
}
