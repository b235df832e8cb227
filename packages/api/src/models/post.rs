//! Post records and the payloads used to create them.

use serde::{Deserialize, Serialize};

/// A post as stored in the `posts` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub body: String,
    /// RFC 3339 UTC timestamp assigned when the post was inserted.
    pub created_at: String,
}

/// What the post form collects before it is sent to the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Response body of a successful `POST /posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostCreated {
    pub message: String,
    #[serde(rename = "postId")]
    pub post_id: String,
}
