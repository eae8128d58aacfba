use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::Post;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::PostService;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: Option<String>,
    pub image_url: Option<String>,
}

/// POST /posts - Publish a post as the authenticated user
pub async fn create(
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let content = match payload.content {
        Some(ref content) if !content.trim().is_empty() => content,
        _ => return Err(ApiError::bad_request("Post content is required")),
    };

    let post = PostService::new()
        .await?
        .create(auth_user.user_id, content, payload.image_url.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /my-posts - The authenticated user's posts, newest first
pub async fn list_mine(
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let posts = PostService::new()
        .await?
        .list_by_user(auth_user.user_id)
        .await?;

    Ok(Json(json!({ "posts": posts })))
}
