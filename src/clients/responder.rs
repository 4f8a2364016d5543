// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page-side answering of resource requests
//!
//! The page owns file access the worker lacks. It loads the requested
//! resource, decides whether it came from a bundled extension, and replies
//! under the same token.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

use super::{ResourceReply, ResourceRequest};
use crate::error::{Error, Result};
use crate::uri::ResourceUri;

/// Loads resource bytes on behalf of the page
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    /// Read the whole resource
    async fn load(&self, uri: &ResourceUri) -> Result<Bytes>;
}

/// Loader for `file:` URIs
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

#[async_trait]
impl ResourceLoader for FileLoader {
    async fn load(&self, uri: &ResourceUri) -> Result<Bytes> {
        let path = uri
            .file_path()
            .ok_or_else(|| Error::load(uri.to_string(), "not a local file URI"))?;
        let data = tokio::fs::read(&path)
            .await
            .map_err(|e| Error::load(uri.to_string(), e.to_string()))?;
        Ok(Bytes::from(data))
    }
}

/// Page responder configuration
#[derive(Debug, Clone, Default)]
pub struct ResponderConfig {
    /// Locations of installed extensions
    pub extension_roots: Vec<ResourceUri>,
}

impl ResponderConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extension location
    pub fn extension_root(mut self, root: ResourceUri) -> Self {
        self.extension_roots.push(root);
        self
    }
}

/// Answers [`ResourceRequest`]s for one page
pub struct PageResponder<L> {
    loader: L,
    config: ResponderConfig,
}

impl<L: ResourceLoader + 'static> PageResponder<L> {
    /// Create a responder
    pub fn new(loader: L, config: ResponderConfig) -> Self {
        Self { loader, config }
    }

    /// Whether `uri` lies inside one of the configured extension roots
    pub fn is_extension_resource(&self, uri: &ResourceUri) -> bool {
        self.config
            .extension_roots
            .iter()
            .any(|root| is_within(root, uri))
    }

    /// Load and build the reply for one request
    ///
    /// A failed load answers with an empty payload that is never marked
    /// cacheable, so the worker does not wait forever on an unreadable file.
    pub async fn answer(&self, request: ResourceRequest) -> ResourceReply {
        match self.loader.load(&request.uri).await {
            Ok(data) => {
                let is_extension_resource = self.is_extension_resource(&request.uri);
                tracing::debug!(
                    token = %request.token,
                    uri = %request.uri,
                    bytes = data.len(),
                    extension = is_extension_resource,
                    "Answering resource request"
                );
                ResourceReply::new(request.token, data, is_extension_resource)
            }
            Err(e) => {
                tracing::warn!(token = %request.token, error = %e, "Resource load failed");
                ResourceReply::new(request.token, Bytes::new(), false)
            }
        }
    }

    /// Serve requests until the channel closes
    ///
    /// Each request is answered on its own task, so slow loads do not hold
    /// up later ones. `deliver` hands the reply back to the worker.
    pub async fn run<F>(self: Arc<Self>, mut requests: mpsc::UnboundedReceiver<ResourceRequest>, deliver: F)
    where
        F: Fn(ResourceReply) + Send + Sync + 'static,
    {
        let deliver = Arc::new(deliver);
        while let Some(request) = requests.recv().await {
            let responder = Arc::clone(&self);
            let deliver = Arc::clone(&deliver);
            tokio::spawn(async move {
                let reply = responder.answer(request).await;
                deliver(reply);
            });
        }
    }
}

fn is_within(root: &ResourceUri, uri: &ResourceUri) -> bool {
    if root.scheme() != uri.scheme() || root.authority() != uri.authority() {
        return false;
    }
    let root_path = root.path();
    let root_path = root_path.trim_end_matches('/');
    let path = uri.path();
    path.strip_prefix(root_path)
        .map(|rest| rest.starts_with('/'))
        .unwrap_or(false)
}
