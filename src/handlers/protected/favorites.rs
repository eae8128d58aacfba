use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::Favorite;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::{FavoriteService, SpotService};

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub skate_spot_id: Option<i32>,
}

/// POST /favorites - Bookmark a spot
///
/// Favoriting the same spot twice is a 409, mapped from the unique
/// constraint on the (user, spot) pair.
pub async fn add(
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let spot_id = payload
        .skate_spot_id
        .ok_or_else(|| ApiError::bad_request("skate_spot_id is required"))?;

    if !SpotService::new().await?.exists(spot_id).await? {
        return Err(ApiError::not_found("Skate spot not found"));
    }

    let favorite = FavoriteService::new()
        .await?
        .add(auth_user.user_id, spot_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /favorites/:id - Remove a bookmark; :id is the skate spot id
pub async fn remove(
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let spot_id: i32 = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid skate spot id"))?;

    let removed = FavoriteService::new()
        .await?
        .remove(auth_user.user_id, spot_id)
        .await?;

    if !removed {
        return Err(ApiError::not_found("Favorite not found"));
    }

    Ok(Json(json!({ "message": "Favorite removed" })))
}

/// GET /favorites - The authenticated user's favorited spots, most
/// recently favorited first
pub async fn list(Extension(auth_user): Extension<AuthUser>) -> Result<Json<Value>, ApiError> {
    let favorites = FavoriteService::new()
        .await?
        .list(auth_user.user_id)
        .await?;

    Ok(Json(json!({ "favorites": favorites })))
}
