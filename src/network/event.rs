// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Intercepted request events

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::http::Request;
use crate::http::Response;

/// Navigation preload already in flight for a request.
///
/// Resolves to `None` when the host started no preload or it produced nothing.
pub type PreloadResponse = BoxFuture<'static, Option<Response>>;

/// An outgoing page request observed by the worker
pub struct FetchEvent {
    /// The intercepted request
    pub request: Request,
    /// Identifier of the page that issued the request
    pub client_id: String,
    preload: Option<PreloadResponse>,
}

impl FetchEvent {
    /// Create a new fetch event without a preload
    pub fn new(request: Request, client_id: impl Into<String>) -> Self {
        Self {
            request,
            client_id: client_id.into(),
            preload: None,
        }
    }

    /// Attach a preload response that is still being produced
    pub fn with_preload<F>(mut self, preload: F) -> Self
    where
        F: Future<Output = Option<Response>> + Send + 'static,
    {
        self.preload = Some(preload.boxed());
        self
    }

    /// Attach an already available preload response
    pub fn with_preload_response(self, response: Response) -> Self {
        self.with_preload(async move { Some(response) })
    }

    /// Whether a preload was attached
    pub fn has_preload(&self) -> bool {
        self.preload.is_some()
    }

    /// Take the preload future, leaving none behind
    pub fn take_preload(&mut self) -> Option<PreloadResponse> {
        self.preload.take()
    }
}

impl fmt::Debug for FetchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchEvent")
            .field("method", &self.request.method)
            .field("url", &self.request.url.as_str())
            .field("client_id", &self.client_id)
            .field("has_preload", &self.preload.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_preload_is_taken_once() {
        let request = Request::get("https://example.com/").unwrap();
        let preload = Response::synthesized("preloaded", "text/html").unwrap();
        let mut event = FetchEvent::new(request, "client-1").with_preload_response(preload);

        assert!(event.has_preload());
        let fut = event.take_preload().unwrap();
        assert!(!event.has_preload());
        assert!(event.take_preload().is_none());

        let response = fut.await.unwrap();
        assert_eq!(response.text().unwrap(), "preloaded");
    }

    #[test]
    fn test_debug_output() {
        let request = Request::get("https://example.com/x").unwrap();
        let event = FetchEvent::new(request, "client-7");
        let debug = format!("{:?}", event);

        assert!(debug.contains("client-7"));
        assert!(debug.contains("has_preload: false"));
    }
}
