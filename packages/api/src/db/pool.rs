//! Database connection pool using the OnceCell pattern.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use crate::settings::Database;

static POOL: OnceCell<SqlitePool> = OnceCell::const_new();

/// Open a pool for the configured database, creating the file if it does not exist.
pub async fn connect(database: &Database) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&database.url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(database.connections)
        .connect_with(options)
        .await
}

/// Get or initialize the process-wide pool.
/// The settings passed on the first call win; later calls return the cached pool.
pub async fn get_pool(database: &Database) -> Result<&'static SqlitePool, sqlx::Error> {
    POOL.get_or_try_init(|| connect(database)).await
}

/// A pool over a private in-memory database.
///
/// An in-memory SQLite database lives as long as its connection, so the pool is pinned
/// to one connection that is never recycled.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}
