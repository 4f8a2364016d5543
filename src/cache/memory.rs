// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! In-process cache storage

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use super::{CacheStorage, ResponseCache};
use crate::error::Result;
use crate::http::{Request, RequestKey, Response};

/// A stored response and when it was stored
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub response: Response,
    pub stored_at: DateTime<Utc>,
}

/// Response cache held in memory
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<RequestKey, CachedResponse>,
}

impl MemoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Full entry for a request, including its timestamp
    pub fn entry(&self, request: &Request) -> Option<CachedResponse> {
        self.entries.get(&request.key()).map(|e| e.value().clone())
    }

    /// Remove the entry for a request
    pub fn delete(&self, request: &Request) -> bool {
        self.entries.remove(&request.key()).is_some()
    }

    /// Keys currently stored
    pub fn keys(&self) -> Vec<RequestKey> {
        self.entries.iter().map(|e| e.key().clone()).collect()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn lookup(&self, request: &Request) -> Result<Option<Response>> {
        Ok(self
            .entries
            .get(&request.key())
            .map(|e| e.value().response.clone()))
    }

    async fn put(&self, request: &Request, response: Response) -> Result<()> {
        self.entries.insert(
            request.key(),
            CachedResponse {
                response,
                stored_at: Utc::now(),
            },
        );
        Ok(())
    }
}

/// Named in-memory caches
#[derive(Debug, Default, Clone)]
pub struct MemoryCacheStorage {
    caches: Arc<DashMap<String, Arc<MemoryCache>>>,
}

impl MemoryCacheStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Concrete handle to a cache, creating it if needed
    pub fn cache(&self, name: &str) -> Arc<MemoryCache> {
        self.caches
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryCache::new()))
            .clone()
    }

    /// Whether a cache with this name was ever opened
    pub fn has(&self, name: &str) -> bool {
        self.caches.contains_key(name)
    }

    /// Delete a named cache and everything in it
    pub fn delete(&self, name: &str) -> bool {
        self.caches.remove(name).is_some()
    }

    /// Names of all caches
    pub fn names(&self) -> Vec<String> {
        self.caches.iter().map(|e| e.key().clone()).collect()
    }
}

#[async_trait]
impl CacheStorage for MemoryCacheStorage {
    async fn open(&self, name: &str) -> Result<Arc<dyn ResponseCache>> {
        let cache: Arc<dyn ResponseCache> = self.cache(name);
        Ok(cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[tokio::test]
    async fn test_put_then_lookup() {
        let cache = MemoryCache::new();
        let request = Request::get("https://host/vscode-resources/fetch?file%3A%2F%2F%2Fa.png").unwrap();
        let response = Response::synthesized("png-bytes", "image/png").unwrap();

        cache.put(&request, response).await.unwrap();

        let hit = cache.lookup(&request).await.unwrap().unwrap();
        assert_eq!(hit.text().unwrap(), "png-bytes");
        assert_eq!(hit.content_type(), Some("image/png"));
        assert!(cache.entry(&request).unwrap().stored_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_keyed_by_method_and_url() {
        let cache = MemoryCache::new();
        let get = Request::get("https://host/a?x").unwrap();
        let post = Request::new(Method::POST, "https://host/a?x").unwrap();
        let other = Request::get("https://host/a?y").unwrap();

        cache
            .put(&get, Response::synthesized("a", "text/plain").unwrap())
            .await
            .unwrap();

        assert!(cache.lookup(&get).await.unwrap().is_some());
        assert!(cache.lookup(&post).await.unwrap().is_none());
        assert!(cache.lookup(&other).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_storage_shares_named_cache() {
        let storage = MemoryCacheStorage::new();
        let request = Request::get("https://host/a").unwrap();

        let first = storage.open("vscode-resources").await.unwrap();
        first
            .put(&request, Response::synthesized("a", "text/plain").unwrap())
            .await
            .unwrap();

        let second = storage.open("vscode-resources").await.unwrap();
        assert!(second.lookup(&request).await.unwrap().is_some());
        assert_eq!(storage.cache("vscode-resources").len(), 1);

        let other = storage.open("elsewhere").await.unwrap();
        assert!(other.lookup(&request).await.unwrap().is_none());

        let mut names = storage.names();
        names.sort();
        assert_eq!(names, vec!["elsewhere", "vscode-resources"]);
        assert!(storage.delete("elsewhere"));
        assert!(!storage.has("elsewhere"));
    }
}
