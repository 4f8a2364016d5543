// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Install and activation

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::clients::Clients;
use crate::error::{Error, Result};

/// Worker lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerState {
    /// Created, not yet installed
    Parsed,
    /// Install in progress
    Installing,
    /// Installed, activation pending
    Installed,
    /// Activation in progress
    Activating,
    /// Controlling pages
    Activated,
    /// Replaced or failed
    Redundant,
}

impl WorkerState {
    /// Whether the worker is controlling pages
    pub fn is_active(&self) -> bool {
        matches!(self, WorkerState::Activated)
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkerState::Parsed => "parsed",
            WorkerState::Installing => "installing",
            WorkerState::Installed => "installed",
            WorkerState::Activating => "activating",
            WorkerState::Activated => "activated",
            WorkerState::Redundant => "redundant",
        };
        f.write_str(name)
    }
}

/// The registration the worker runs under
#[async_trait]
pub trait WorkerHost: Send + Sync {
    /// Activate this version without waiting for older ones to drain
    async fn skip_waiting(&self) -> Result<()>;

    /// Whether navigation preload is available at all
    fn supports_navigation_preload(&self) -> bool;

    /// Turn on navigation preload
    async fn enable_navigation_preload(&self) -> Result<()>;

    /// Take control of every open page, not only new ones
    async fn claim_clients(&self) -> Result<()>;
}

/// Host for in-process use, claiming through a [`Clients`] registry
pub struct LocalHost {
    clients: Arc<dyn Clients>,
    navigation_preload: bool,
    preload_enabled: AtomicBool,
    waiting_skipped: AtomicBool,
}

impl LocalHost {
    /// Create a host; `navigation_preload` says whether preload is supported
    pub fn new(clients: Arc<dyn Clients>, navigation_preload: bool) -> Self {
        Self {
            clients,
            navigation_preload,
            preload_enabled: AtomicBool::new(false),
            waiting_skipped: AtomicBool::new(false),
        }
    }

    /// Whether navigation preload was turned on
    pub fn preload_enabled(&self) -> bool {
        self.preload_enabled.load(Ordering::Acquire)
    }

    /// Whether install asked to skip waiting
    pub fn waiting_skipped(&self) -> bool {
        self.waiting_skipped.load(Ordering::Acquire)
    }
}

#[async_trait]
impl WorkerHost for LocalHost {
    async fn skip_waiting(&self) -> Result<()> {
        self.waiting_skipped.store(true, Ordering::Release);
        Ok(())
    }

    fn supports_navigation_preload(&self) -> bool {
        self.navigation_preload
    }

    async fn enable_navigation_preload(&self) -> Result<()> {
        self.preload_enabled.store(true, Ordering::Release);
        Ok(())
    }

    async fn claim_clients(&self) -> Result<()> {
        self.clients
            .claim()
            .await
            .map_err(|e| Error::lifecycle("claim", e.to_string()))
    }
}
