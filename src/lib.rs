// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Resource Relay
//!
//! Serves page resources that ordinary HTTP cannot reach by relaying the
//! request to the page that owns it.
//!
//! ## How a request flows
//!
//! - Requests whose path is exactly `/vscode-resources/fetch` are relayed;
//!   everything else goes to the navigation preload or the network untouched.
//! - A relayed request is first looked up in the `vscode-resources` cache.
//! - On a miss, the worker posts `{uri, token}` to the requesting page and
//!   waits for a reply carrying the same token.
//! - The reply bytes become a `200` response typed by the resource's media
//!   extension (`text/plain` otherwise). Extension resources are cached under
//!   the intercepted request; workspace resources never are.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use resource_relay::{
//!     ChannelClients, FetchEvent, HttpClient, MemoryCacheStorage, RelayConfig, Request,
//!     ResourceReply, ResourceWorker,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let clients = ChannelClients::new();
//!     let mut page = clients.register("page-1");
//!
//!     let worker = Arc::new(ResourceWorker::new(
//!         RelayConfig::default(),
//!         Arc::new(MemoryCacheStorage::new()),
//!         Arc::new(clients),
//!         Arc::new(HttpClient::new()?),
//!     ));
//!
//!     let request = Request::get(
//!         "https://localhost/vscode-resources/fetch?file%3A%2F%2F%2Fext%2Flogo.png",
//!     )?;
//!     let relay = tokio::spawn({
//!         let worker = worker.clone();
//!         async move { worker.handle_fetch(FetchEvent::new(request, "page-1")).await }
//!     });
//!
//!     let ask = page.recv().await.expect("page channel open");
//!     worker.handle_message(ResourceReply::new(ask.token, vec![0x89, b'P', b'N', b'G'], true));
//!
//!     let response = relay.await??;
//!     println!("{:?}", response.content_type());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod clients;
pub mod error;
pub mod http;
pub mod mime;
pub mod network;
pub mod token;
pub mod uri;
pub mod worker;

// Re-exports for convenience

// Worker
pub use worker::{
    LocalHost, PendingRelays, RelayConfig, RelayDelivery, RelayStats, ResourceWorker, WorkerHost,
    WorkerState, RESOURCE_PATH,
};

// Cache
pub use cache::{
    CacheStorage, CachedResponse, MemoryCache, MemoryCacheStorage, ResponseCache,
    DEFAULT_CACHE_NAME,
};

// Clients and messages
pub use clients::{
    ChannelClient, ChannelClients, ClientHandle, Clients, FileLoader, PageResponder,
    ResourceLoader, ResourceReply, ResourceRequest, ResponderConfig,
};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Request, RequestKey, Response};

// Interception
pub use network::{FetchEvent, Network, PreloadResponse};

// Resource identity
pub use mime::{media_mime, DEFAULT_CONTENT_TYPE};
pub use token::{TokenSource, UuidTokens};
pub use uri::{ResourceUri, UriComponents};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
