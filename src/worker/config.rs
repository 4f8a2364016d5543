// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Relay configuration

use std::time::Duration;

use crate::cache::DEFAULT_CACHE_NAME;
use crate::mime::DEFAULT_CONTENT_TYPE;

/// Path reserved for relayed resource requests
pub const RESOURCE_PATH: &str = "/vscode-resources/fetch";

/// Relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Exact request path that is relayed; everything else passes through
    pub resource_path: String,
    /// Cache holding extension resource responses
    pub cache_name: String,
    /// Content type for resources without a media mapping
    pub default_content_type: String,
    /// Upper bound on waiting for a page reply. `None` waits forever.
    pub relay_timeout: Option<Duration>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            resource_path: RESOURCE_PATH.to_string(),
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            default_content_type: DEFAULT_CONTENT_TYPE.to_string(),
            relay_timeout: None,
        }
    }
}

impl RelayConfig {
    /// Create a new relay config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relayed path
    pub fn resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = path.into();
        self
    }

    /// Set the cache name
    pub fn cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    /// Set the fallback content type
    pub fn default_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.default_content_type = content_type.into();
        self
    }

    /// Bound the wait for page replies
    ///
    /// On expiry the pending token is dropped and the request fails with
    /// [`Error::Timeout`](crate::Error::Timeout). A reply arriving later is
    /// ignored like any unknown token.
    pub fn relay_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.relay_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.resource_path, "/vscode-resources/fetch");
        assert_eq!(config.cache_name, "vscode-resources");
        assert_eq!(config.default_content_type, "text/plain");
        assert!(config.relay_timeout.is_none());
    }

    #[test]
    fn test_builder() {
        let config = RelayConfig::new()
            .cache_name("test-cache")
            .relay_timeout(Some(Duration::from_secs(5)));
        assert_eq!(config.cache_name, "test-cache");
        assert_eq!(config.relay_timeout, Some(Duration::from_secs(5)));
    }
}
