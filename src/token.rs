// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Correlation token generation

use uuid::Uuid;

/// Source of correlation tokens
///
/// Every call must return a string not returned before for the lifetime of
/// the worker, otherwise two relays would share a pending entry.
pub trait TokenSource: Send + Sync {
    /// Produce a fresh token
    fn next_token(&self) -> String;
}

/// Random v4 UUID tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokens;

impl TokenSource for UuidTokens {
    fn next_token(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
