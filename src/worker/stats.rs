// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Relay counters

use serde::Serialize;

/// Counters kept by a worker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelayStats {
    /// Requests handed to the network or a preload
    pub passthrough: u64,
    /// Relayed requests answered from the cache
    pub cache_hits: u64,
    /// Relayed requests that missed the cache
    pub cache_misses: u64,
    /// Tokens issued for relays
    pub relays_started: u64,
    /// Relays that produced a response
    pub relays_completed: u64,
    /// Responses written to the cache
    pub responses_cached: u64,
    /// Replies with unknown or consumed tokens
    pub replies_ignored: u64,
    /// Relays abandoned after the configured timeout
    pub relays_timed_out: u64,
}

impl RelayStats {
    /// Relays still waiting on a reply
    pub fn in_flight(&self) -> u64 {
        self.relays_started
            .saturating_sub(self.relays_completed)
            .saturating_sub(self.relays_timed_out)
    }

    /// Fraction of relayed requests served from the cache
    pub fn hit_ratio(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_values() {
        let stats = RelayStats {
            cache_hits: 3,
            cache_misses: 1,
            relays_started: 1,
            ..Default::default()
        };
        assert_eq!(stats.in_flight(), 1);
        assert!((stats.hit_ratio() - 0.75).abs() < f64::EPSILON);
        assert_eq!(RelayStats::default().hit_ratio(), 0.0);
    }
}
