//! # Database module — SQLite pool, table bootstrap and queries
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so that client (WASM) builds never
//! pull in SQLx or Tokio.
//!
//! ## Design
//!
//! Every query function takes the pool explicitly and issues exactly one parameterized
//! statement. Store errors are returned unchanged as [`sqlx::Error`]; the routing layer
//! decides how they surface.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`pool`] | [`connect`], the process-wide [`get_pool`] singleton and [`connect_in_memory`] |
//! | [`schema`] | [`init_schema`]: `CREATE TABLE IF NOT EXISTS` for users, addresses, posts |
//! | [`users`] | paged listing (plain and joined with addresses), count, lookups, inserts |
//! | [`posts`] | list by user, get, create, delete |

pub mod pool;
pub mod posts;
pub mod schema;
pub mod users;

pub use pool::{connect, connect_in_memory, get_pool};
pub use schema::init_schema;
