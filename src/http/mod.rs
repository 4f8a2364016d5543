// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer shared by the relay and the pass-through path
//!
//! Request and response values that cross the interception boundary, plus a
//! reqwest-backed client for traffic the relay does not handle itself.

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig};
pub use request::{Request, RequestKey};
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("resource-relay/", env!("CARGO_PKG_VERSION"));
