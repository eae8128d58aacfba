use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::database::models::SkateSpot;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::{NewSpot, SpotService};

#[derive(Debug, Deserialize)]
pub struct CreateSpotRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub image_url: Option<String>,
    pub security_level: Option<String>,
    pub obstacles: Option<String>,
    pub best_time_of_day: Option<String>,
}

/// POST /skate-spots - Add a spot to the map
///
/// Creation requires a login, but the row records no owner: spots belong
/// to the map, not to the user who added them.
pub async fn create(
    Extension(_auth_user): Extension<AuthUser>,
    Json(payload): Json<CreateSpotRequest>,
) -> Result<(StatusCode, Json<SkateSpot>), ApiError> {
    let mut field_errors = HashMap::new();

    let name = require(non_blank(payload.name), "name", &mut field_errors);
    let obstacles = require(non_blank(payload.obstacles), "obstacles", &mut field_errors);
    let best_time_of_day = require(
        non_blank(payload.best_time_of_day),
        "best_time_of_day",
        &mut field_errors,
    );
    let latitude = require(payload.latitude, "latitude", &mut field_errors);
    let longitude = require(payload.longitude, "longitude", &mut field_errors);

    if !field_errors.is_empty() {
        return Err(ApiError::validation_error("Missing required fields", field_errors));
    }

    let spot = SpotService::new()
        .await?
        .create(NewSpot {
            name,
            description: payload.description,
            latitude,
            longitude,
            image_url: payload.image_url,
            security_level: payload.security_level,
            obstacles,
            best_time_of_day,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(spot)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Unwrap a required field, recording an error when it is absent. The
/// default placeholder is never read on the error path.
fn require<T: Default>(
    value: Option<T>,
    name: &str,
    field_errors: &mut HashMap<String, String>,
) -> T {
    value.unwrap_or_else(|| {
        field_errors.insert(name.to_string(), "This field is required".to_string());
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_fields_are_all_reported() {
        let mut errors = HashMap::new();
        require(non_blank(None), "name", &mut errors);
        require(non_blank(Some("  ".to_string())), "obstacles", &mut errors);
        require(Some(Decimal::ONE), "latitude", &mut errors);

        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("obstacles"));
        assert!(!errors.contains_key("latitude"));
    }
}
