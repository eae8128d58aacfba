use axum::response::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::PostService;

/// GET /posts - The public feed, newest first
///
/// An empty feed is a 200 with an empty array, not an error.
pub async fn list_all() -> Result<Json<Value>, ApiError> {
    let posts = PostService::new().await?.list_all().await?;
    Ok(Json(json!({ "posts": posts })))
}
