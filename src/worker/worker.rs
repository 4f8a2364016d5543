// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Resource worker: routing, cache-then-relay, reply correlation

use std::sync::Arc;

use parking_lot::RwLock;
use percent_encoding::percent_decode_str;
use tokio::sync::oneshot;

use super::config::RelayConfig;
use super::lifecycle::{WorkerHost, WorkerState};
use super::pending::{PendingRelays, RelayDelivery};
use super::stats::RelayStats;
use crate::cache::CacheStorage;
use crate::clients::{Clients, ResourceReply, ResourceRequest};
use crate::error::{Error, Result};
use crate::http::{Request, Response};
use crate::mime;
use crate::network::{FetchEvent, Network};
use crate::token::{TokenSource, UuidTokens};
use crate::uri::ResourceUri;

/// Intercepts page requests and serves relayed resources
pub struct ResourceWorker {
    /// Relay configuration
    config: RelayConfig,
    /// Named response caches
    caches: Arc<dyn CacheStorage>,
    /// Pages that can be asked for resources
    clients: Arc<dyn Clients>,
    /// Network for pass-through traffic
    network: Arc<dyn Network>,
    /// Correlation token generator
    tokens: Arc<dyn TokenSource>,
    /// Relays waiting on a page reply
    pending: PendingRelays,
    /// Counters
    stats: RwLock<RelayStats>,
    /// Lifecycle state
    state: RwLock<WorkerState>,
}

impl ResourceWorker {
    /// Create a worker over the given substrates
    pub fn new(
        config: RelayConfig,
        caches: Arc<dyn CacheStorage>,
        clients: Arc<dyn Clients>,
        network: Arc<dyn Network>,
    ) -> Self {
        Self {
            config,
            caches,
            clients,
            network,
            tokens: Arc::new(UuidTokens),
            pending: PendingRelays::new(),
            stats: RwLock::new(RelayStats::default()),
            state: RwLock::new(WorkerState::Parsed),
        }
    }

    /// Replace the token generator
    pub fn with_token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Get worker configuration
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> WorkerState {
        *self.state.read()
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> RelayStats {
        self.stats.read().clone()
    }

    /// Relays waiting on a reply
    pub fn pending(&self) -> &PendingRelays {
        &self.pending
    }

    /// Install: take over immediately instead of waiting for older versions
    pub async fn install(&self, host: &dyn WorkerHost) -> Result<()> {
        self.set_state(WorkerState::Installing);
        if let Err(e) = host.skip_waiting().await {
            self.set_state(WorkerState::Redundant);
            return Err(e);
        }
        self.set_state(WorkerState::Installed);
        Ok(())
    }

    /// Activate: enable navigation preload where supported, then claim pages
    pub async fn activate(&self, host: &dyn WorkerHost) -> Result<()> {
        self.set_state(WorkerState::Activating);
        let result = async {
            if host.supports_navigation_preload() {
                host.enable_navigation_preload().await?;
            }
            host.claim_clients().await
        }
        .await;

        match result {
            Ok(()) => {
                self.set_state(WorkerState::Activated);
                Ok(())
            }
            Err(e) => {
                self.set_state(WorkerState::Redundant);
                Err(e)
            }
        }
    }

    /// Whether a request targets the relayed path
    ///
    /// This is an exact match on the decoded path. Sub-paths pass through.
    pub fn is_resource_request(&self, request: &Request) -> bool {
        percent_decode_str(request.url.path()).decode_utf8_lossy() == self.config.resource_path
    }

    /// Answer an intercepted request
    pub async fn handle_fetch(&self, event: FetchEvent) -> Result<Response> {
        if !self.is_resource_request(&event.request) {
            return self.respond_with_default(event).await;
        }
        self.respond_with_resource(event).await
    }

    /// Preload response if one resolves, otherwise the network
    pub async fn respond_with_default(&self, mut event: FetchEvent) -> Result<Response> {
        self.stats.write().passthrough += 1;

        if let Some(preload) = event.take_preload() {
            if let Some(response) = preload.await {
                tracing::trace!(url = %event.request.url, "Using navigation preload");
                return Ok(response);
            }
        }

        tracing::trace!(url = %event.request.url, "Passing request to network");
        self.network.fetch(&event.request).await
    }

    /// Cached response, or a relay through the requesting page
    pub async fn respond_with_resource(&self, event: FetchEvent) -> Result<Response> {
        let cache = self.caches.open(&self.config.cache_name).await?;
        if let Some(cached) = cache.lookup(&event.request).await? {
            self.stats.write().cache_hits += 1;
            tracing::debug!(url = %event.request.url, "Serving resource from cache");
            return Ok(cached);
        }
        self.stats.write().cache_misses += 1;

        let resource = ResourceUri::from_query(event.request.query().unwrap_or(""))?;
        let token = self.tokens.next_token();
        let reply = self.pending.register(token.clone())?;
        self.stats.write().relays_started += 1;

        match self.clients.get(&event.client_id).await {
            Some(client) => {
                tracing::debug!(
                    token = %token,
                    client = %event.client_id,
                    uri = %resource,
                    "Relaying resource request"
                );
                client.post_message(ResourceRequest {
                    uri: resource.clone(),
                    token: token.clone(),
                });
            }
            None => {
                tracing::debug!(
                    token = %token,
                    client = %event.client_id,
                    "Requesting client not found; relay stays pending"
                );
            }
        }

        let delivery = self.wait_for_reply(&token, reply).await?;

        let content_type =
            mime::media_mime(&resource).unwrap_or(self.config.default_content_type.as_str());
        let response = Response::synthesized(delivery.data, content_type)?;

        if delivery.is_extension_resource {
            cache.put(&event.request, response.clone()).await?;
            self.stats.write().responses_cached += 1;
        }

        self.stats.write().relays_completed += 1;
        tracing::debug!(
            token = %token,
            content_type = %content_type,
            bytes = response.body_len(),
            cached = delivery.is_extension_resource,
            "Relay completed"
        );

        Ok(response)
    }

    /// Route a page reply to the relay waiting on its token
    ///
    /// Unknown or already consumed tokens are ignored; returns whether the
    /// reply matched a pending relay.
    pub fn handle_message(&self, reply: ResourceReply) -> bool {
        let delivered = self.pending.complete(
            &reply.token,
            RelayDelivery {
                data: reply.data,
                is_extension_resource: reply.is_extension_resource,
            },
        );

        if !delivered {
            self.stats.write().replies_ignored += 1;
            tracing::trace!(token = %reply.token, "Ignoring reply for unknown token");
        }
        delivered
    }

    /// [`handle_message`](Self::handle_message) for a JSON-encoded reply
    pub fn handle_message_json(&self, json: &str) -> Result<bool> {
        Ok(self.handle_message(ResourceReply::from_json(json)?))
    }

    async fn wait_for_reply(
        &self,
        token: &str,
        reply: oneshot::Receiver<RelayDelivery>,
    ) -> Result<RelayDelivery> {
        let Some(limit) = self.config.relay_timeout else {
            return reply
                .await
                .map_err(|_| Error::RelayAbandoned(token.to_string()));
        };

        match tokio::time::timeout(limit, reply).await {
            Ok(delivery) => delivery.map_err(|_| Error::RelayAbandoned(token.to_string())),
            Err(_) => {
                self.pending.cancel(token);
                self.stats.write().relays_timed_out += 1;
                tracing::debug!(token = %token, "Relay timed out");
                Err(Error::timeout(token, limit.as_millis() as u64))
            }
        }
    }

    fn set_state(&self, state: WorkerState) {
        let mut current = self.state.write();
        let previous = *current;
        tracing::debug!(from = %previous, to = %state, "Worker state change");
        *current = state;
    }
}
