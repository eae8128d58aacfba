use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A crowd-sourced skate spot. Coordinates are fixed-precision decimals,
/// never floats. The row records no owner: creation requires a login but
/// spots belong to the map, not to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkateSpot {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub image_url: Option<String>,
    pub security_level: Option<String>,
    pub obstacles: String,
    pub best_time_of_day: String,
    pub created_at: DateTime<Utc>,
}
