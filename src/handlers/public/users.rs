use axum::extract::Path;
use axum::response::Json;
use serde_json::{json, Value};

use crate::database::models::PublicUserView;
use crate::error::ApiError;
use crate::services::AccountService;

/// GET /users - All users, newest first. Never includes emails or hashes.
pub async fn list() -> Result<Json<Value>, ApiError> {
    let users = AccountService::new().await?.list_users().await?;
    Ok(Json(json!({ "users": users })))
}

/// GET /users/:id - One user joined with their profile display fields
pub async fn show(Path(id): Path<String>) -> Result<Json<PublicUserView>, ApiError> {
    let user_id: i32 = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid user id"))?;

    let view = AccountService::new()
        .await?
        .public_view(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(view))
}
