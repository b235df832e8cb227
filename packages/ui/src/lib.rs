//! This crate contains all shared UI for the workspace.

pub mod components;
pub mod hooks;
pub mod links;
pub mod pagination;
pub mod validation;

pub use hooks::{
    use_posts, use_query_client, use_users, use_users_count, QueryClient, QueryClientProvider,
};
pub use links::{format_address, posts_href, PostsQuery};
