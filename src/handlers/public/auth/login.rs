use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims};
use crate::error::ApiError;
use crate::services::AccountService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login - Exchange credentials for a fresh bearer token
///
/// Unknown email and wrong password both answer 401 with the same body,
/// so the endpoint cannot be used to probe which emails are registered.
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    let accounts = AccountService::new().await?;

    let user = accounts
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !bcrypt::verify(&payload.password, &user.password)? {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = generate_jwt(Claims::new(user.id))?;

    Ok(Json(json!({
        "message": "Login successful",
        "token": token,
    })))
}
