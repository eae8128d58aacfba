use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Post, PostWithAuthor};

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn create(
        &self,
        user_id: i32,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<Post, DatabaseError> {
        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (user_id, content, image_url) VALUES ($1, $2, $3) \
             RETURNING id, user_id, content, image_url, created_at",
        )
        .bind(user_id)
        .bind(content)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    /// One user's posts, newest first
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<PostWithAuthor>, DatabaseError> {
        let posts = sqlx::query_as::<_, PostWithAuthor>(
            "SELECT p.id, p.content, p.image_url, p.created_at, u.username \
             FROM posts p \
             JOIN users u ON p.user_id = u.id \
             WHERE p.user_id = $1 \
             ORDER BY p.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    /// The public feed, newest first
    pub async fn list_all(&self) -> Result<Vec<PostWithAuthor>, DatabaseError> {
        let posts = sqlx::query_as::<_, PostWithAuthor>(
            "SELECT p.id, p.content, p.image_url, p.created_at, u.username \
             FROM posts p \
             JOIN users u ON p.user_id = u.id \
             ORDER BY p.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }
}
