// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the resource relay
//!
//! Unmatched paths, unknown clients and stale tokens are not errors and never
//! show up here. What does surface is substrate failure (cache, network) and
//! malformed input on the wire.

use thiserror::Error;

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the resource relay
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The nested resource URI could not be decoded from the query string
    #[error("Invalid resource URI '{uri}': {reason}")]
    InvalidResource { uri: String, reason: String },

    /// Cache substrate failure
    #[error("Cache '{cache}' error: {reason}")]
    Cache { cache: String, reason: String },

    /// Network error that did not come from reqwest
    #[error("Network error: {0}")]
    Network(String),

    /// Lifecycle step rejected by the worker host
    #[error("Lifecycle error during {phase}: {reason}")]
    Lifecycle { phase: String, reason: String },

    /// Relay wait exceeded the configured bound
    #[error("Relay timed out after {duration_ms}ms waiting for token {token}")]
    Timeout { token: String, duration_ms: u64 },

    /// The pending entry was dropped without a reply
    #[error("Relay for token {0} was abandoned")]
    RelayAbandoned(String),

    /// Resource loading on the page side failed
    #[error("Failed to load resource {uri}: {reason}")]
    Load { uri: String, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid resource error
    pub fn invalid_resource(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidResource {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    /// Create a cache error
    pub fn cache(cache: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Cache {
            cache: cache.into(),
            reason: reason.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Create a lifecycle error
    pub fn lifecycle(phase: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Lifecycle {
            phase: phase.into(),
            reason: reason.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(token: impl Into<String>, duration_ms: u64) -> Self {
        Error::Timeout {
            token: token.into(),
            duration_ms,
        }
    }

    /// Create a load error
    pub fn load(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Load {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Check if retrying the intercepted request could succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Timeout { .. }
                | Error::RelayAbandoned(_)
                | Error::Network(_)
                | Error::Http(_)
        )
    }

    /// Correlation token involved, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::Timeout { token, .. } => Some(token),
            Error::RelayAbandoned(token) => Some(token),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
