// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Persistent response cache substrate
//!
//! Caches are opened by name from a [`CacheStorage`] and keyed by request
//! identity (method + URL), never by the resource the request points at.

mod memory;

pub use memory::{CachedResponse, MemoryCache, MemoryCacheStorage};

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::http::{Request, Response};

/// Name of the cache holding relayed resource responses
pub const DEFAULT_CACHE_NAME: &str = "vscode-resources";

/// Named collection of response caches
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Open (creating if needed) the cache called `name`
    async fn open(&self, name: &str) -> Result<Arc<dyn ResponseCache>>;
}

/// Request-keyed response store
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Stored response for a request with the same method and URL
    async fn lookup(&self, request: &Request) -> Result<Option<Response>>;

    /// Store `response` under the identity of `request`, replacing any entry
    async fn put(&self, request: &Request, response: Response) -> Result<()>;
}
