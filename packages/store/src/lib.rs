//! Client-side query cache.
//!
//! Fetch results are stored under a [`QueryKey`] and served from memory until a
//! mutation invalidates them. Invalidation works on key prefixes, so invalidating
//! `["posts"]` also marks `["posts", "<user id>"]` stale.

pub mod cache;
pub mod key;

pub use cache::QueryCache;
pub use key::QueryKey;
