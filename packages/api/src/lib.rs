//! # API crate — models, REST client and REST server for the blog demo
//!
//! This crate is the backbone of the workspace. It defines the records that cross the
//! wire (users, addresses, posts), the HTTP client the web frontend uses to talk to the
//! REST API, and, behind the `server` feature, everything the API process needs.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | — | `User`, `Address`, `Post` and the request/response payloads |
//! | [`client`] | — | `ApiClient`: typed calls against the REST endpoints, non-2xx mapped to errors |
//! | [`db`] | `server` | SQLite pool, table bootstrap, and the per-resource query functions |
//! | [`routes`] | `server` | axum router: request validation and delegation to [`db`] |
//! | [`error`] | `server` | `ApiError` and its mapping onto HTTP status codes and JSON bodies |
//! | [`settings`] | `server` | Layered configuration (defaults, `config.toml`, environment) |
//!
//! ## Endpoints served by [`routes::router`]
//!
//! - **Posts**: `GET /posts?userId=`, `POST /posts`, `DELETE /posts/{id}`
//! - **Users**: `GET /users`, `GET /users/with-addresses`, `GET /users/count`, `GET /users/{id}`

pub mod client;
pub mod models;

#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod settings;

pub use client::{ApiClient, ClientError, Endpoints};
pub use models::{Address, NewPost, Post, PostCreated, User, UsersCount};
