//! Post queries.

use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::Post;

const SELECT_POSTS: &str = "
SELECT *
FROM posts
WHERE user_id = ?";

const SELECT_POST_BY_ID: &str = "
SELECT *
FROM posts
WHERE id = ?
LIMIT 1";

const DELETE_POST: &str = "
DELETE FROM posts
WHERE id = ?";

const INSERT_POST: &str = "
INSERT INTO posts (id, user_id, title, body, created_at)
VALUES (?, ?, ?, ?, ?)";

/// Fields supplied by the caller when creating a post; id and timestamp are generated.
#[derive(Debug, Clone)]
pub struct NewPostRecord {
    pub user_id: String,
    pub title: String,
    pub body: String,
}

pub async fn list_posts_by_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as(SELECT_POSTS)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn get_post_by_id(pool: &SqlitePool, post_id: &str) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as(SELECT_POST_BY_ID)
        .bind(post_id)
        .fetch_optional(pool)
        .await
}

/// Returns whether a row was actually removed.
pub async fn delete_post(pool: &SqlitePool, post_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(DELETE_POST).bind(post_id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Insert a post with a fresh UUID and the current time, returning the new id.
pub async fn create_post(pool: &SqlitePool, post: &NewPostRecord) -> Result<String, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    sqlx::query(INSERT_POST)
        .bind(&id)
        .bind(&post.user_id)
        .bind(&post.title)
        .bind(&post.body)
        .bind(&created_at)
        .execute(pool)
        .await?;

    Ok(id)
}
