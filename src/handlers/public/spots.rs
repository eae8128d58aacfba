use axum::extract::Query;
use axum::response::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::{spot_service, Region, SpotService};

#[derive(Debug, Deserialize)]
pub struct SpotQuery {
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub latitude_delta: Option<Decimal>,
    pub longitude_delta: Option<Decimal>,
}

/// GET /skate-spots - All spots newest first, optionally narrowed to a
/// map viewport
///
/// The server owns region filtering: clients send their viewport center
/// and deltas instead of filtering the full table locally. Without a
/// center the whole table comes back.
pub async fn list(Query(query): Query<SpotQuery>) -> Result<Json<Value>, ApiError> {
    let region = match (query.latitude, query.longitude) {
        (Some(latitude), Some(longitude)) => Some(Region {
            latitude,
            longitude,
            latitude_delta: query
                .latitude_delta
                .unwrap_or_else(spot_service::default_region_delta),
            longitude_delta: query
                .longitude_delta
                .unwrap_or_else(spot_service::default_region_delta),
        }),
        (None, None) => None,
        _ => {
            return Err(ApiError::bad_request(
                "latitude and longitude must be provided together",
            ))
        }
    };

    let spots = SpotService::new().await?.list(region).await?;
    Ok(Json(json!({ "spots": spots })))
}
