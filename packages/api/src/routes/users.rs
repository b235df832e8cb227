//! `/users` handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::{User, UsersCount};

const DEFAULT_PAGE_NUMBER: i64 = 0;
const DEFAULT_PAGE_SIZE: i64 = 100;

/// Raw listing parameters. Kept as strings so unparseable values fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub include_addresses: Option<String>,
}

impl PageParams {
    /// `(page_number, page_size)`: 0-based page, at least one row per page.
    pub fn page(&self) -> ApiResult<(i64, i64)> {
        let page_number = number_or(self.page_number.as_deref(), DEFAULT_PAGE_NUMBER);
        let page_size = number_or(self.page_size.as_deref(), DEFAULT_PAGE_SIZE);

        if page_number < 0 || page_size < 1 {
            return Err(ApiError::bad_request("Invalid page number or page size"));
        }
        Ok((page_number, page_size))
    }

    pub fn include_addresses(&self) -> bool {
        self.include_addresses.as_deref() == Some("true")
    }
}

/// Missing, unparseable and zero values all mean "use the default".
fn number_or(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n != 0)
        .unwrap_or(default)
}

/// `GET /users?pageNumber&pageSize&includeAddresses`
pub async fn list_users(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Vec<User>>> {
    let (page_number, page_size) = params.page()?;

    let users = if params.include_addresses() {
        db::users::list_users_with_addresses(&pool, page_number, page_size).await?
    } else {
        db::users::list_users(&pool, page_number, page_size).await?
    };
    Ok(Json(users))
}

/// `GET /users/with-addresses?pageNumber&pageSize`
pub async fn list_users_with_addresses(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Vec<User>>> {
    let (page_number, page_size) = params.page()?;
    let users = db::users::list_users_with_addresses(&pool, page_number, page_size).await?;
    Ok(Json(users))
}

/// `GET /users/count`
pub async fn count_users(State(pool): State<SqlitePool>) -> ApiResult<Json<UsersCount>> {
    let count = db::users::count_users(&pool).await?;
    Ok(Json(UsersCount { count }))
}

/// `GET /users/{id}`; `?includeAddresses=true` also loads the user's addresses.
pub async fn get_user(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<String>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<User>> {
    let Some(mut user) = db::users::get_user_by_id(&pool, &user_id).await? else {
        return Err(ApiError::not_found("User not found"));
    };

    if params.include_addresses() {
        user.addresses = Some(db::users::get_addresses_by_user_id(&pool, &user_id).await?);
    }
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::db::users::tests::seeded_pool;
    use crate::routes::router;
    use crate::routes::tests::{get, send};

    fn params(page_number: Option<&str>, page_size: Option<&str>) -> PageParams {
        PageParams {
            page_number: page_number.map(Into::into),
            page_size: page_size.map(Into::into),
            include_addresses: None,
        }
    }

    #[test]
    fn test_page_defaults() {
        assert_eq!(params(None, None).page().unwrap(), (0, 100));
        assert_eq!(params(Some("abc"), Some("0")).page().unwrap(), (0, 100));
        assert_eq!(params(Some("2"), Some("25")).page().unwrap(), (2, 25));
    }

    #[test]
    fn test_page_rejects_out_of_range() {
        assert!(params(Some("-1"), None).page().is_err());
        assert!(params(None, Some("-5")).page().is_err());
    }

    #[tokio::test]
    async fn test_list_users() {
        let app = router(seeded_pool().await);

        let (status, body) = send(&app, get("/users?pageNumber=0&pageSize=2")).await;
        assert_eq!(status, StatusCode::OK);
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0]["name"], "Alice");
        assert!(users[0].get("addresses").is_none());
    }

    #[tokio::test]
    async fn test_list_users_include_addresses_toggle() {
        let app = router(seeded_pool().await);

        let (status, body) = send(&app, get("/users?includeAddresses=true")).await;
        assert_eq!(status, StatusCode::OK);
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0]["addresses"].as_array().unwrap().len(), 2);
        assert_eq!(users[1]["addresses"].as_array().unwrap().len(), 0);

        let (_, body) = send(&app, get("/users?includeAddresses=yes")).await;
        assert!(body[0].get("addresses").is_none());
    }

    #[tokio::test]
    async fn test_list_users_rejects_bad_paging() {
        let app = router(seeded_pool().await);

        for uri in [
            "/users?pageNumber=-1",
            "/users?pageSize=-3",
            "/users/with-addresses?pageNumber=-2",
        ] {
            let (status, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "Invalid page number or page size");
        }
    }

    #[tokio::test]
    async fn test_huge_page_number_returns_empty_page() {
        let app = router(seeded_pool().await);

        for uri in [
            "/users?pageNumber=9223372036854775807&pageSize=100",
            "/users/with-addresses?pageNumber=9223372036854775807&pageSize=100",
        ] {
            let (status, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, serde_json::json!([]), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_with_addresses_endpoint() {
        let app = router(seeded_pool().await);

        let (status, body) = send(&app, get("/users/with-addresses")).await;
        assert_eq!(status, StatusCode::OK);
        let carol = &body.as_array().unwrap()[2];
        assert_eq!(carol["name"], "Carol");
        assert_eq!(carol["addresses"][0]["street"], "3 High St");
        assert_eq!(carol["addresses"][0]["user_id"], "u-carol");
    }

    #[tokio::test]
    async fn test_count_users() {
        let app = router(seeded_pool().await);

        let (status, body) = send(&app, get("/users/count")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "count": 3 }));
    }

    #[tokio::test]
    async fn test_get_user() {
        let app = router(seeded_pool().await);

        let (status, body) = send(&app, get("/users/u-bob")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "bob");
        assert!(body.get("addresses").is_none());

        let (_, body) = send(&app, get("/users/u-alice?includeAddresses=true")).await;
        assert_eq!(body["addresses"].as_array().unwrap().len(), 2);

        let (status, body) = send(&app, get("/users/nobody")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }
}
