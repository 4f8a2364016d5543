// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Pages controlled by the worker, and the messages they exchange with it
//!
//! Posting is one-way. The worker never waits for an acknowledgment, only
//! for the eventual [`ResourceReply`] routed back through
//! [`ResourceWorker::handle_message`](crate::worker::ResourceWorker::handle_message).

mod channel;
mod message;
mod responder;

pub use channel::{ChannelClient, ChannelClients};
pub use message::{ResourceReply, ResourceRequest};
pub use responder::{FileLoader, PageResponder, ResourceLoader, ResponderConfig};

use std::sync::Arc;

use async_trait::async_trait;

/// A live page that can receive messages
pub trait ClientHandle: Send + Sync {
    /// Client identifier
    fn id(&self) -> &str;

    /// Fire-and-forget delivery of a resource request
    fn post_message(&self, message: ResourceRequest);
}

/// Registry of pages the worker can reach
#[async_trait]
pub trait Clients: Send + Sync {
    /// Resolve a client by id; `None` when it is unknown or gone
    async fn get(&self, client_id: &str) -> Option<Arc<dyn ClientHandle>>;

    /// Take control of every open client
    async fn claim(&self) -> crate::error::Result<()> {
        Ok(())
    }
}
