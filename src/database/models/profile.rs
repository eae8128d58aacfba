use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: i32,
    pub user_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Flat users x user_profiles join returned by GET /profile
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProfileView {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
}
