//! # Data hooks over the REST API
//!
//! [`QueryClientProvider`] puts a [`QueryClient`] into context. The client bundles the
//! [`ApiClient`], a shared [`QueryCache`] and a revision counter signal:
//!
//! - Reads (`use_posts`, `use_users`, `use_users_count`) go through the cache and
//!   subscribe to the revision, so they rerun whenever a mutation completes.
//! - Mutations (`create_post`, `delete_post`) call the API, mark the affected cache
//!   keys stale and bump the revision. Rerunning reads then find their entries stale
//!   and refetch, while untouched keys are served from the cache.
//!
//! Errors reach components as display strings.

use api::{ApiClient, NewPost, Post, PostCreated, User, UsersCount};
use dioxus::prelude::*;
use store::QueryCache;

/// Cache keys used by the hooks.
pub mod keys {
    use store::QueryKey;

    /// Prefix of every post list.
    pub fn posts() -> QueryKey {
        QueryKey::from("posts")
    }

    pub fn user_posts(user_id: &str) -> QueryKey {
        posts().with(user_id)
    }

    pub fn users_data() -> QueryKey {
        QueryKey::from("usersData")
    }

    pub fn users_count() -> QueryKey {
        QueryKey::from("usersCount")
    }
}

/// Mark post lists stale after a post of `user_id` changed. `None` marks every
/// user's list.
pub fn invalidate_posts(cache: &QueryCache, user_id: Option<&str>) -> usize {
    let mut marked = 0;
    if let Some(user_id) = user_id {
        marked += cache.invalidate(&keys::user_posts(user_id));
    }
    marked + cache.invalidate(&keys::posts())
}

#[derive(Clone)]
pub struct QueryClient {
    cache: QueryCache,
    api: ApiClient,
    revision: Signal<u64>,
}

impl QueryClient {
    pub fn new(api: ApiClient, revision: Signal<u64>) -> Self {
        Self {
            cache: QueryCache::new(),
            api,
            revision,
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Current revision. Reading it inside a resource subscribes the resource.
    pub fn revision(&self) -> u64 {
        (self.revision)()
    }

    fn bump(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }

    pub async fn posts(&self, user_id: &str) -> Result<Vec<Post>, String> {
        self.cache
            .fetch(keys::user_posts(user_id), || self.api.fetch_posts(user_id))
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn users(&self) -> Result<Vec<User>, String> {
        self.cache
            .fetch(keys::users_data(), || self.api.fetch_users_with_addresses())
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn users_count(&self) -> Result<UsersCount, String> {
        self.cache
            .fetch(keys::users_count(), || self.api.fetch_users_count())
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn create_post(&self, user_id: &str, post: &NewPost) -> Result<PostCreated, String> {
        let created = self
            .api
            .create_post(user_id, post)
            .await
            .map_err(|e| e.to_string())?;
        tracing::debug!("created post {}", created.post_id);

        invalidate_posts(&self.cache, Some(user_id));
        self.bump();
        Ok(created)
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<(), String> {
        self.api
            .delete_post(post_id)
            .await
            .map_err(|e| e.to_string())?;
        tracing::debug!("deleted post {post_id}");

        invalidate_posts(&self.cache, None);
        self.bump();
        Ok(())
    }
}

/// Provide a [`QueryClient`] talking to `base_url` to every child.
#[component]
pub fn QueryClientProvider(base_url: String, children: Element) -> Element {
    let revision = use_signal(|| 0u64);
    use_context_provider(|| QueryClient::new(ApiClient::new(base_url.clone()), revision));

    rsx! {
        {children}
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}

/// Posts of `user_id`; resolves to an empty list when no user is selected.
pub fn use_posts(user_id: Option<String>) -> Resource<Result<Vec<Post>, String>> {
    let client = use_query_client();

    // Track the argument in a signal so the resource reruns when it changes.
    let mut user_signal = use_signal(|| user_id.clone());
    if *user_signal.peek() != user_id {
        user_signal.set(user_id);
    }

    use_resource(move || {
        let client = client.clone();
        let user_id = user_signal();
        client.revision();
        async move {
            match user_id {
                Some(id) => client.posts(&id).await,
                None => Ok(Vec::new()),
            }
        }
    })
}

/// All users, with addresses.
pub fn use_users() -> Resource<Result<Vec<User>, String>> {
    let client = use_query_client();
    use_resource(move || {
        let client = client.clone();
        client.revision();
        async move { client.users().await }
    })
}

pub fn use_users_count() -> Resource<Result<UsersCount, String>> {
    let client = use_query_client();
    use_resource(move || {
        let client = client.clone();
        client.revision();
        async move { client.users_count().await }
    })
}
