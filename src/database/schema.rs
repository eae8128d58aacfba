use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config;

/// Table definitions, in dependency order
const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(255) NOT NULL UNIQUE,
        email VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_profiles (
        id SERIAL PRIMARY KEY,
        user_id INT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
        first_name VARCHAR(255),
        last_name VARCHAR(255),
        bio TEXT,
        age INT,
        location VARCHAR(255),
        profile_picture TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS posts (
        id SERIAL PRIMARY KEY,
        user_id INT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        content TEXT NOT NULL,
        image_url TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skate_spots (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        description TEXT,
        latitude DECIMAL(9,6) NOT NULL,
        longitude DECIMAL(9,6) NOT NULL,
        image_url TEXT,
        security_level VARCHAR(50),
        obstacles TEXT NOT NULL,
        best_time_of_day VARCHAR(100) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS favorites (
        id SERIAL PRIMARY KEY,
        user_id INT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        skate_spot_id INT NOT NULL REFERENCES skate_spots(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        UNIQUE (user_id, skate_spot_id)
    )
    "#,
];

/// Reverse dependency order so drops never hit a foreign-key reference
const DROP_TABLES: &[&str] = &[
    "DROP TABLE IF EXISTS favorites",
    "DROP TABLE IF EXISTS skate_spots",
    "DROP TABLE IF EXISTS posts",
    "DROP TABLE IF EXISTS user_profiles",
    "DROP TABLE IF EXISTS users",
];

/// Create all application tables. Idempotent.
pub async fn create_tables(pool: &PgPool) -> Result<()> {
    for statement in CREATE_TABLES {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("failed to create table")?;
    }
    info!("Database tables created");
    Ok(())
}

/// Drop all application tables.
pub async fn drop_tables(pool: &PgPool) -> Result<()> {
    for statement in DROP_TABLES {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("failed to drop table")?;
    }
    info!("Database tables dropped");
    Ok(())
}

/// Insert a demo user with a profile and a first post.
///
/// Runs in a single transaction: either all demo rows land or none do.
pub async fn seed(pool: &PgPool) -> Result<()> {
    let cost = config::config().security.bcrypt_cost;
    let hashed = bcrypt::hash("password123", cost).context("failed to hash demo password")?;

    let mut tx = pool.begin().await?;

    let (user_id,): (i32,) = sqlx::query_as(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind("defaultUser")
    .bind("default@example.com")
    .bind(&hashed)
    .fetch_one(&mut *tx)
    .await
    .context("failed to seed user")?;

    sqlx::query("INSERT INTO user_profiles (user_id, first_name, bio) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind("Default")
        .bind("Just here to skate.")
        .execute(&mut *tx)
        .await
        .context("failed to seed profile")?;

    sqlx::query("INSERT INTO posts (user_id, content) VALUES ($1, $2)")
        .bind(user_id)
        .bind("This is a default post!")
        .execute(&mut *tx)
        .await
        .context("failed to seed post")?;

    tx.commit().await?;
    info!("Seeded demo user and post");
    Ok(())
}
