//! # REST client used by the web frontend
//!
//! [`Endpoints`] turns a base URL into the URLs of every API route, and [`ApiClient`]
//! wraps each route in a typed async call. Any response outside the 2xx range becomes
//! [`ClientError::Status`] carrying a short description of the failed operation, which
//! is what the UI shows in its error state.
//!
//! Built on `reqwest`, so the same code runs natively and in the browser.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{NewPost, Post, PostCreated, User, UsersCount};

/// Where the API listens when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: StatusCode, message: String },
}

/// URLs of the REST API relative to a base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn users_with_addresses(&self) -> String {
        format!("{}/users/with-addresses", self.base_url)
    }

    pub fn users_count(&self) -> String {
        format!("{}/users/count", self.base_url)
    }

    pub fn posts(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    pub fn post_by_id(&self, id: &str) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    pub fn posts_by_user(&self, user_id: &str) -> String {
        format!("{}/posts?userId={}", self.base_url, user_id)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Serialize)]
struct CreatePostBody<'a> {
    title: &'a str,
    body: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::new(base_url),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Decode a JSON body, or fail with `message` when the status is not 2xx.
    async fn json<T: DeserializeOwned>(response: Response, message: &str) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} ({})", message, status);
            return Err(ClientError::Status {
                status,
                message: message.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    pub async fn fetch_posts(&self, user_id: &str) -> Result<Vec<Post>, ClientError> {
        let response = self
            .http
            .get(self.endpoints.posts())
            .query(&[("userId", user_id)])
            .send()
            .await?;
        Self::json(response, "Failed to fetch posts").await
    }

    pub async fn fetch_users_with_addresses(&self) -> Result<Vec<User>, ClientError> {
        let response = self
            .http
            .get(self.endpoints.users_with_addresses())
            .send()
            .await?;
        Self::json(response, "Failed to fetch users").await
    }

    pub async fn fetch_users_count(&self) -> Result<UsersCount, ClientError> {
        let response = self.http.get(self.endpoints.users_count()).send().await?;
        Self::json(response, "Failed to fetch users count").await
    }

    /// Create a post for `user_id`; title and content are trimmed before sending.
    pub async fn create_post(&self, user_id: &str, post: &NewPost) -> Result<PostCreated, ClientError> {
        let body = CreatePostBody {
            title: post.title.trim(),
            body: post.content.trim(),
            user_id,
        };
        let response = self
            .http
            .post(self.endpoints.posts())
            .json(&body)
            .send()
            .await?;
        Self::json(response, "Failed to create post").await
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<serde_json::Value, ClientError> {
        let response = self
            .http
            .delete(self.endpoints.post_by_id(post_id))
            .send()
            .await?;
        Self::json(response, "Failed to delete post").await
    }
}


/// End-to-end: the client against the real router on a local port.
#[cfg(all(test, feature = "server"))]
mod server_tests {
    use super::*;
    use crate::db::users::tests::seeded_pool;

    async fn spawn_api() -> ApiClient {
        let app = crate::routes::router(seeded_pool().await);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        ApiClient::new(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn test_post_lifecycle() {
        let client = spawn_api().await;

        assert!(client.fetch_posts("u-alice").await.unwrap().is_empty());

        let created = client
            .create_post("u-alice", &NewPost::new("  Title ", " Content  "))
            .await
            .unwrap();
        let posts = client.fetch_posts("u-alice").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, created.post_id);
        assert_eq!(posts[0].title, "Title");
        assert_eq!(posts[0].body, "Content");

        client.delete_post(&created.post_id).await.unwrap();
        assert!(client.fetch_posts("u-alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let client = spawn_api().await;

        let err = client.delete_post("missing").await.unwrap_err();
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "Failed to delete post");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = client
            .create_post("ghost", &NewPost::new("t", "c"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to create post");
    }

    #[tokio::test]
    async fn test_users_and_count() {
        let client = spawn_api().await;

        let users = client.fetch_users_with_addresses().await.unwrap();
        assert_eq!(users.len(), 3);
        assert!(users.iter().all(|u| u.addresses.is_some()));

        assert_eq!(client.fetch_users_count().await.unwrap().count, 3);
    }
}
