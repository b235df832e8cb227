//! `/posts` handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::{self, posts::NewPostRecord};
use crate::error::{ApiError, ApiResult};
use crate::models::{Post, PostCreated};

#[derive(Debug, Deserialize)]
pub struct PostsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// `GET /posts?userId=`
pub async fn list_posts(
    State(pool): State<SqlitePool>,
    Query(query): Query<PostsQuery>,
) -> ApiResult<Json<Vec<Post>>> {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("userId is required"))?;

    let posts = db::posts::list_posts_by_user(&pool, &user_id).await?;
    Ok(Json(posts))
}

/// A body field as seen by the validator.
enum Field<'a> {
    /// Absent, null, or a falsy scalar (`""`, `0`, `false`).
    Missing,
    NotString,
    Text(&'a str),
}

fn field<'a>(payload: &'a Value, name: &str) -> Field<'a> {
    match payload.get(name) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Field::Missing,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Field::Missing,
        Some(Value::String(s)) if s.is_empty() => Field::Missing,
        Some(Value::String(s)) => Field::Text(s),
        Some(_) => Field::NotString,
    }
}

/// `POST /posts` with `{ title, body, user_id }`.
pub async fn create_post(
    State(pool): State<SqlitePool>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PostCreated>)> {
    let Json(payload) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let fields = [
        field(&payload, "title"),
        field(&payload, "body"),
        field(&payload, "user_id"),
    ];
    if fields.iter().any(|f| matches!(f, Field::Missing)) {
        return Err(ApiError::bad_request(
            "Title, body, and user_id are required",
        ));
    }
    let [Field::Text(title), Field::Text(body), Field::Text(user_id)] = fields else {
        return Err(ApiError::bad_request(
            "Title, body, and user_id must be strings",
        ));
    };

    let (title, body) = (title.trim(), body.trim());
    if title.is_empty() || body.is_empty() {
        return Err(ApiError::bad_request("Title and body cannot be empty"));
    }

    if db::users::get_user_by_id(&pool, user_id).await?.is_none() {
        return Err(ApiError::not_found("User not found"));
    }

    let post_id = db::posts::create_post(
        &pool,
        &NewPostRecord {
            user_id: user_id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        },
    )
    .await?;
    tracing::info!(%post_id, %user_id, "Post created");

    Ok((
        StatusCode::CREATED,
        Json(PostCreated {
            message: "Post created successfully".to_string(),
            post_id,
        }),
    ))
}

/// `DELETE /posts/{id}`
pub async fn delete_post(
    State(pool): State<SqlitePool>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Value>> {
    if db::posts::get_post_by_id(&pool, &post_id).await?.is_none() {
        return Err(ApiError::not_found("Post not found"));
    }

    if !db::posts::delete_post(&pool, &post_id).await? {
        tracing::error!(%post_id, "Delete affected no rows");
        return Err(ApiError::Internal("Failed to delete post".to_string()));
    }
    tracing::info!(%post_id, "Post deleted");

    Ok(Json(json!({ "message": "Post deleted successfully" })))
}
