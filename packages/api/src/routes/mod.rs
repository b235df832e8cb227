//! # REST routes
//!
//! [`router`] wires the handlers in [`posts`] and [`users`] onto their paths and shares
//! the [`SqlitePool`] with them as axum state. Handlers validate the request shape,
//! delegate to [`crate::db`], and report failures as [`crate::error::ApiError`].
//!
//! Every origin may call the API; the web client is served from a different port.

use axum::{
    http::{header, HeaderName, Method},
    routing::{delete, get},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod posts;
pub mod users;

/// Build the API router over the given pool.
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/{id}", delete(posts::delete_post))
        .route("/users", get(users::list_users))
        .route("/users/with-addresses", get(users::list_users_with_addresses))
        .route("/users/count", get(users::count_users))
        .route("/users/{id}", get(users::get_user))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}
