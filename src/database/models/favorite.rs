use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub skate_spot_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Favorite joined to its spot, as GET /favorites returns it
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FavoriteSpot {
    pub skate_spot_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub image_url: Option<String>,
    pub security_level: Option<String>,
    pub obstacles: String,
    pub best_time_of_day: String,
    pub favorited_at: DateTime<Utc>,
}
