//! # QueryCache — keyed fetch results with prefix invalidation
//!
//! Values are stored as JSON so one cache can hold every response type the client
//! deals with. Each entry is either fresh or stale:
//!
//! - [`fetch`](QueryCache::fetch) serves a fresh entry directly and runs the fetcher
//!   otherwise, storing its result as fresh. Fetch errors are returned and leave the
//!   cache untouched.
//! - [`invalidate`](QueryCache::invalidate) marks every entry under a key prefix stale.
//!   Stale values stay readable through [`get`](QueryCache::get) until they are
//!   replaced, so a page can keep showing old data while it refetches.
//!
//! Clones share the same storage.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::key::QueryKey;

#[derive(Clone, Debug)]
struct Entry {
    value: serde_json::Value,
    stale: bool,
}

#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, Entry>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached value, fresh or stale.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(key)?;
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Store a fresh value. Values that cannot be represented as JSON are not cached.
    pub fn set<T: Serialize>(&self, key: QueryKey, value: &T) {
        if let Ok(value) = serde_json::to_value(value) {
            self.entries
                .lock()
                .unwrap()
                .insert(key, Entry { value, stale: false });
        }
    }

    /// Missing entries count as stale.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .map_or(true, |entry| entry.stale)
    }

    /// Mark every entry whose key starts with `prefix` as stale; returns how many.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let mut marked = 0;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.stale = true;
                marked += 1;
            }
        }
        marked
    }

    pub fn remove(&self, key: &QueryKey) -> bool {
        self.entries.lock().unwrap().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serve `key` from the cache when fresh, otherwise run `fetcher` and cache its result.
    pub async fn fetch<T, E, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if !self.is_stale(&key) {
            if let Some(value) = self.get(&key) {
                return Ok(value);
            }
        }

        let value = fetcher().await?;
        self.set(key, &value);
        Ok(value)
    }
}
