// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Pending relays keyed by correlation token
//!
//! An entry is inserted when a relay starts and removed by the first reply
//! carrying its token. There is no expiry: a page that never answers leaves
//! its entry behind until the worker is dropped, unless the worker was
//! configured with a relay timeout.

use bytes::Bytes;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::oneshot;

use crate::error::{Error, Result};

/// What a page reply hands to the waiting relay
#[derive(Debug, Clone)]
pub struct RelayDelivery {
    pub data: Bytes,
    pub is_extension_resource: bool,
}

/// Token → waiting relay
#[derive(Debug, Default)]
pub struct PendingRelays {
    entries: DashMap<String, oneshot::Sender<RelayDelivery>>,
}

impl PendingRelays {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Start waiting on `token`
    ///
    /// Fails if the token is already pending; a token has at most one waiter.
    pub fn register(&self, token: impl Into<String>) -> Result<oneshot::Receiver<RelayDelivery>> {
        match self.entries.entry(token.into()) {
            Entry::Occupied(e) => Err(Error::other(format!(
                "Correlation token {} is already pending",
                e.key()
            ))),
            Entry::Vacant(e) => {
                let (tx, rx) = oneshot::channel();
                e.insert(tx);
                Ok(rx)
            }
        }
    }

    /// Deliver to the relay waiting on `token`, removing the entry
    ///
    /// Returns `false` for unknown or already consumed tokens.
    pub fn complete(&self, token: &str, delivery: RelayDelivery) -> bool {
        match self.entries.remove(token) {
            Some((_, tx)) => {
                if tx.send(delivery).is_err() {
                    tracing::trace!(token = %token, "Relay waiter already gone");
                }
                true
            }
            None => false,
        }
    }

    /// Drop the entry for `token` without delivering
    pub fn cancel(&self, token: &str) -> bool {
        self.entries.remove(token).is_some()
    }

    /// Whether `token` is waiting
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Tokens currently waiting
    pub fn tokens(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().clone()).collect()
    }

    /// Number of waiting relays
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery(data: &'static [u8]) -> RelayDelivery {
        RelayDelivery {
            data: Bytes::from_static(data),
            is_extension_resource: false,
        }
    }

    #[tokio::test]
    async fn test_complete_once() {
        let pending = PendingRelays::new();
        let rx = pending.register("t1").unwrap();
        assert!(pending.contains("t1"));

        assert!(pending.complete("t1", delivery(b"first")));
        assert!(!pending.complete("t1", delivery(b"second")));
        assert!(pending.is_empty());

        let got = rx.await.unwrap();
        assert_eq!(&got.data[..], b"first");
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let pending = PendingRelays::new();
        let _rx = pending.register("t1").unwrap();
        assert!(pending.register("t1").is_err());
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_unknown_token() {
        let pending = PendingRelays::new();
        let _rx = pending.register("known").unwrap();

        assert!(!pending.complete("unknown", delivery(b"x")));
        assert_eq!(pending.tokens(), vec!["known".to_string()]);
    }

    #[tokio::test]
    async fn test_cancel_abandons_waiter() {
        let pending = PendingRelays::new();
        let rx = pending.register("t1").unwrap();

        assert!(pending.cancel("t1"));
        assert!(rx.await.is_err());
        assert!(!pending.cancel("t1"));
    }

    #[test]
    fn test_complete_after_waiter_dropped() {
        let pending = PendingRelays::new();
        let rx = pending.register("t1").unwrap();
        drop(rx);

        assert!(pending.complete("t1", delivery(b"late")));
        assert!(pending.is_empty());
    }
}
