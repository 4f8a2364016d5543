// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Channel-backed client registry

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::mpsc;

use super::{ClientHandle, Clients, ResourceRequest};
use crate::error::Result;

/// A page reachable through an unbounded channel
#[derive(Debug)]
pub struct ChannelClient {
    id: String,
    tx: mpsc::UnboundedSender<ResourceRequest>,
    controlled: AtomicBool,
}

impl ChannelClient {
    /// Whether the worker has claimed this client
    pub fn is_controlled(&self) -> bool {
        self.controlled.load(Ordering::Acquire)
    }

    /// Whether the page side has gone away
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl ClientHandle for ChannelClient {
    fn id(&self) -> &str {
        &self.id
    }

    fn post_message(&self, message: ResourceRequest) {
        if self.tx.send(message).is_err() {
            tracing::trace!(client = %self.id, "Client receiver dropped, message discarded");
        }
    }
}

/// In-process registry of pages
#[derive(Debug, Default, Clone)]
pub struct ChannelClients {
    clients: Arc<DashMap<String, Arc<ChannelClient>>>,
}

impl ChannelClients {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page and return the receiving end of its message channel
    ///
    /// Registering an id again replaces the previous client.
    pub fn register(&self, id: impl Into<String>) -> mpsc::UnboundedReceiver<ResourceRequest> {
        let id = id.into();
        let (tx, rx) = mpsc::unbounded_channel();
        self.clients.insert(
            id.clone(),
            Arc::new(ChannelClient {
                id,
                tx,
                controlled: AtomicBool::new(false),
            }),
        );
        rx
    }

    /// Forget a page
    pub fn unregister(&self, id: &str) -> bool {
        self.clients.remove(id).is_some()
    }

    /// Concrete handle for a registered page
    pub fn client(&self, id: &str) -> Option<Arc<ChannelClient>> {
        self.clients.get(id).map(|c| c.value().clone())
    }

    /// Number of registered pages
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether no pages are registered
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl Clients for ChannelClients {
    async fn get(&self, client_id: &str) -> Option<Arc<dyn ClientHandle>> {
        let client = self.client(client_id)?;
        if client.is_closed() {
            return None;
        }
        let handle: Arc<dyn ClientHandle> = client;
        Some(handle)
    }

    async fn claim(&self) -> Result<()> {
        for entry in self.clients.iter() {
            entry.value().controlled.store(true, Ordering::Release);
        }
        tracing::debug!(clients = self.clients.len(), "Claimed open clients");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri::ResourceUri;

    fn request(token: &str) -> ResourceRequest {
        ResourceRequest {
            uri: ResourceUri::parse("file:///ext/a.png").unwrap(),
            token: token.to_string(),
        }
    }

    #[tokio::test]
    async fn test_post_reaches_registered_page() {
        let clients = ChannelClients::new();
        let mut rx = clients.register("page-1");

        let handle = clients.get("page-1").await.unwrap();
        assert_eq!(handle.id(), "page-1");
        handle.post_message(request("t1"));

        assert_eq!(rx.recv().await.unwrap().token, "t1");
    }

    #[tokio::test]
    async fn test_unknown_and_closed_clients() {
        let clients = ChannelClients::new();
        assert!(clients.get("missing").await.is_none());

        let rx = clients.register("page-2");
        drop(rx);
        assert!(clients.get("page-2").await.is_none());

        // posting to a closed page is silent
        clients.client("page-2").unwrap().post_message(request("t2"));
    }

    #[tokio::test]
    async fn test_claim_marks_every_client() {
        let clients = ChannelClients::new();
        let _a = clients.register("a");
        let _b = clients.register("b");
        assert!(!clients.client("a").unwrap().is_controlled());

        clients.claim().await.unwrap();

        assert!(clients.client("a").unwrap().is_controlled());
        assert!(clients.client("b").unwrap().is_controlled());
        assert_eq!(clients.len(), 2);
        assert!(clients.unregister("a"));
        assert_eq!(clients.len(), 1);
    }
}
