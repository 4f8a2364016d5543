// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request interception substrate
//!
//! The host delivers every outgoing page request as a [`FetchEvent`]. Requests
//! the worker does not relay go to a [`Network`] implementation unchanged.

mod event;

pub use event::{FetchEvent, PreloadResponse};

use async_trait::async_trait;

use crate::error::Result;
use crate::http::{Request, Response};

/// Ordinary network access for pass-through requests
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use resource_relay::network::Network;
/// use resource_relay::http::{Request, Response};
///
/// struct Offline;
///
/// #[async_trait]
/// impl Network for Offline {
///     async fn fetch(&self, request: &Request) -> resource_relay::Result<Response> {
///         Err(resource_relay::Error::network(format!("offline: {}", request.url)))
///     }
/// }
/// ```
#[async_trait]
pub trait Network: Send + Sync {
    /// Perform the request against the network
    async fn fetch(&self, request: &Request) -> Result<Response>;
}
