use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::error::ApiError;
use crate::services::{AccountService, NewAccount};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    // Profile fields, all optional
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
}

/// POST /register - Create a user account with its profile
///
/// The users row and the user_profiles row are written in one transaction,
/// and the response carries a signed bearer token so the client is logged
/// in immediately after registering.
pub async fn register(Json(payload): Json<RegisterRequest>) -> Result<Json<Value>, ApiError> {
    let mut field_errors = HashMap::new();
    let username = require(payload.username, "username", &mut field_errors);
    let email = require(payload.email, "email", &mut field_errors);
    let password = require(payload.password, "password", &mut field_errors);

    if !field_errors.is_empty() {
        return Err(ApiError::validation_error("Missing required fields", field_errors));
    }

    let accounts = AccountService::new().await?;

    if accounts.email_exists(&email).await? {
        return Err(ApiError::conflict("User already exists"));
    }

    let cost = config::config().security.bcrypt_cost;
    let password_hash = bcrypt::hash(&password, cost)?;

    let user_id = accounts
        .register(NewAccount {
            username,
            email,
            password_hash,
            first_name: payload.first_name,
            last_name: payload.last_name,
            bio: payload.bio,
            age: payload.age,
            location: payload.location,
            profile_picture: payload.profile_picture,
        })
        .await?;

    let token = generate_jwt(Claims::new(user_id))?;

    Ok(Json(json!({
        "message": "User registered successfully",
        "token": token,
    })))
}

/// Pull a required field out of the payload, recording an error when it is
/// missing or blank. The placeholder return is never read on the error path.
fn require(
    value: Option<String>,
    name: &str,
    field_errors: &mut HashMap<String, String>,
) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            field_errors.insert(name.to_string(), "This field is required".to_string());
            String::new()
        }
    }
}
