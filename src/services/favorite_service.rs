use sqlx::PgPool;

use crate::database::manager::{self, DatabaseError, DatabaseManager};
use crate::database::models::{Favorite, FavoriteSpot};

pub struct FavoriteService {
    pool: PgPool,
}

impl FavoriteService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// Bookmark a spot for a user. The (user, spot) pair is unique; a second
    /// favorite of the same spot is a conflict, not a no-op.
    pub async fn add(&self, user_id: i32, spot_id: i32) -> Result<Favorite, DatabaseError> {
        let inserted = sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (user_id, skate_spot_id) VALUES ($1, $2) \
             RETURNING id, user_id, skate_spot_id, created_at",
        )
        .bind(user_id)
        .bind(spot_id)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(favorite) => Ok(favorite),
            Err(e) if manager::is_unique_violation(&e) => Err(DatabaseError::UniqueViolation(
                "Spot already favorited".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a user's favorite of a spot. Returns false when there was
    /// nothing to remove.
    pub async fn remove(&self, user_id: i32, spot_id: i32) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND skate_spot_id = $2")
            .bind(user_id)
            .bind(spot_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// A user's favorited spots, most recently favorited first
    pub async fn list(&self, user_id: i32) -> Result<Vec<FavoriteSpot>, DatabaseError> {
        let favorites = sqlx::query_as::<_, FavoriteSpot>(
            "SELECT f.skate_spot_id, s.name, s.description, s.latitude, s.longitude, \
                    s.image_url, s.security_level, s.obstacles, s.best_time_of_day, \
                    f.created_at AS favorited_at \
             FROM favorites f \
             JOIN skate_spots s ON s.id = f.skate_spot_id \
             WHERE f.user_id = $1 \
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(favorites)
    }
}
