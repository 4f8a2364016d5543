// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use crate::error::{Error, Result};

/// HTTP response representation
///
/// The body is reference counted, so `clone()` yields an independent,
/// fully readable copy. That is what lets the relay hand one copy to the
/// cache and another to the requester.
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
    /// Final URL; `None` for responses synthesized locally
    pub url: Option<Url>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

impl Response {
    /// Create a new response
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        url: Option<Url>,
        response_time_ms: u64,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            url,
            response_time_ms,
        }
    }

    /// Build a 200 response carrying `body` with the given content type
    pub fn synthesized(body: impl Into<Bytes>, content_type: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::try_from(content_type)
            .map_err(|e| Error::other(format!("Invalid content type '{}': {}", content_type, e)))?;
        headers.insert(CONTENT_TYPE, value);

        Ok(Self::new(StatusCode::OK, headers, body.into(), None, 0))
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get body as text
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| Error::Other(e.to_string()))
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get body length
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_status() {
        let resp = Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::new(),
            Url::parse("https://example.com").ok(),
            100,
        );
        assert!(resp.is_success());
        assert_eq!(resp.status_code(), 200);
    }

    #[test]
    fn test_synthesized_response() {
        let resp = Response::synthesized(Bytes::from_static(b"\x89PNG"), "image/png").unwrap();

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.content_type(), Some("image/png"));
        assert_eq!(resp.body_len(), 4);
        assert!(resp.url.is_none());
    }

    #[test]
    fn test_clone_is_independently_readable() {
        let resp = Response::synthesized("Hello, World!", "text/plain").unwrap();
        let copy = resp.clone();
        drop(resp);

        assert_eq!(copy.text().unwrap(), "Hello, World!");
    }
}
