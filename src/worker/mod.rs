// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Resource interception worker
//!
//! Routes intercepted requests, answers relayed ones from the cache or by
//! asking the owning page, and correlates page replies by token.

mod config;
mod lifecycle;
mod pending;
mod stats;
mod worker;

pub use config::{RelayConfig, RESOURCE_PATH};
pub use lifecycle::{LocalHost, WorkerHost, WorkerState};
pub use pending::{PendingRelays, RelayDelivery};
pub use stats::RelayStats;
pub use worker::ResourceWorker;
