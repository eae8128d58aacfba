use sqlx::PgPool;

use crate::database::manager::{self, DatabaseError, DatabaseManager};
use crate::database::models::{ProfileView, PublicUserView, User, UserSummary};

/// Everything needed to create a user and their profile in one shot.
/// The password is already hashed by the time it reaches this layer.
#[derive(Debug)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
}

pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DatabaseError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Create the users row and the user_profiles row atomically.
    ///
    /// Both inserts run in one transaction: a failure on the profile insert
    /// rolls back the user insert, so no orphaned users row can exist.
    pub async fn register(&self, account: NewAccount) -> Result<i32, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let inserted: Result<(i32,), sqlx::Error> = sqlx::query_as(
            "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .fetch_one(&mut *tx)
        .await;

        let user_id = match inserted {
            Ok((id,)) => id,
            // Lost a race against a concurrent registration
            Err(e) if manager::is_unique_violation(&e) => {
                return Err(DatabaseError::UniqueViolation("User already exists".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        sqlx::query(
            "INSERT INTO user_profiles \
             (user_id, first_name, last_name, bio, age, location, profile_picture) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(user_id)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.bio)
        .bind(account.age)
        .bind(&account.location)
        .bind(&account.profile_picture)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user_id)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// users x user_profiles join for the authenticated profile screen
    pub async fn profile_view(&self, user_id: i32) -> Result<Option<ProfileView>, DatabaseError> {
        let view = sqlx::query_as::<_, ProfileView>(
            "SELECT u.username, u.email, p.first_name, p.last_name, p.bio, p.age, \
                    p.location, p.profile_picture \
             FROM users u \
             JOIN user_profiles p ON p.user_id = u.id \
             WHERE u.id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(view)
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, DatabaseError> {
        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT id, username, created_at FROM users ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    /// Public user page: user joined with profile display fields
    pub async fn public_view(&self, user_id: i32) -> Result<Option<PublicUserView>, DatabaseError> {
        let view = sqlx::query_as::<_, PublicUserView>(
            "SELECT u.id, u.username, p.first_name, p.last_name, p.bio, p.age, \
                    p.location, p.profile_picture, u.created_at \
             FROM users u \
             JOIN user_profiles p ON p.user_id = u.id \
             WHERE u.id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(view)
    }
}
