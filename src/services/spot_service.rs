use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::SkateSpot;

/// Half the map viewport, matching the client's default zoom level
pub fn default_region_delta() -> Decimal {
    Decimal::new(5, 2) // 0.05
}

/// A map viewport: center plus the full width/height of the visible box.
/// The visible bounds are center +/- delta/2 on each axis.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub latitude_delta: Decimal,
    pub longitude_delta: Decimal,
}

impl Region {
    /// (min_lat, max_lat, min_lon, max_lon)
    pub fn bounds(&self) -> (Decimal, Decimal, Decimal, Decimal) {
        let two = Decimal::from(2);
        let half_lat = self.latitude_delta / two;
        let half_lon = self.longitude_delta / two;
        (
            self.latitude - half_lat,
            self.latitude + half_lat,
            self.longitude - half_lon,
            self.longitude + half_lon,
        )
    }
}

#[derive(Debug)]
pub struct NewSpot {
    pub name: String,
    pub description: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub image_url: Option<String>,
    pub security_level: Option<String>,
    pub obstacles: String,
    pub best_time_of_day: String,
}

pub struct SpotService {
    pool: PgPool,
}

impl SpotService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn create(&self, spot: NewSpot) -> Result<SkateSpot, DatabaseError> {
        let created = sqlx::query_as::<_, SkateSpot>(
            "INSERT INTO skate_spots \
             (name, description, latitude, longitude, image_url, security_level, \
              obstacles, best_time_of_day) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id, name, description, latitude, longitude, image_url, \
                       security_level, obstacles, best_time_of_day, created_at",
        )
        .bind(&spot.name)
        .bind(&spot.description)
        .bind(spot.latitude)
        .bind(spot.longitude)
        .bind(&spot.image_url)
        .bind(&spot.security_level)
        .bind(&spot.obstacles)
        .bind(&spot.best_time_of_day)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// All spots newest first, optionally narrowed to a viewport bounding box.
    /// The server is the filtering authority; clients pass their viewport
    /// instead of filtering locally.
    pub async fn list(&self, region: Option<Region>) -> Result<Vec<SkateSpot>, DatabaseError> {
        const COLUMNS: &str = "id, name, description, latitude, longitude, image_url, \
                               security_level, obstacles, best_time_of_day, created_at";

        let spots = match region {
            Some(region) => {
                let (min_lat, max_lat, min_lon, max_lon) = region.bounds();
                sqlx::query_as::<_, SkateSpot>(&format!(
                    "SELECT {} FROM skate_spots \
                     WHERE latitude BETWEEN $1 AND $2 AND longitude BETWEEN $3 AND $4 \
                     ORDER BY created_at DESC",
                    COLUMNS
                ))
                .bind(min_lat)
                .bind(max_lat)
                .bind(min_lon)
                .bind(max_lon)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, SkateSpot>(&format!(
                    "SELECT {} FROM skate_spots ORDER BY created_at DESC",
                    COLUMNS
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(spots)
    }

    pub async fn exists(&self, spot_id: i32) -> Result<bool, DatabaseError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM skate_spots WHERE id = $1)")
                .bind(spot_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
