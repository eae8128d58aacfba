use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// bcrypt hash; never serialized into a response
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Listing shape for GET /users: no email, no hash
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user joined with their profile display fields
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PublicUserView {
    pub id: i32,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}
