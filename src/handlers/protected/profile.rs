use axum::extract::Extension;
use axum::response::Json;

use crate::database::models::ProfileView;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::AccountService;

/// GET /profile - The authenticated user's account joined with their profile
pub async fn get_profile(
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<ProfileView>, ApiError> {
    let view = AccountService::new()
        .await?
        .profile_view(auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(Json(view))
}
