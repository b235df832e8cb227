//! Data models for the application.

mod post;
mod user;

pub use post::{NewPost, Post, PostCreated};
pub use user::{Address, User, UsersCount};
