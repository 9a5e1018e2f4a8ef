//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with a fixed expiry.

use std::time::Duration;

use tokio::time::Instant;

use crate::models::Problem;

// == Cache Entry ==
/// A resolved problem together with the instant it stops being served.
///
/// Entries are never mutated after creation; a newer fetch replaces them.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored problem snapshot
    pub value: Problem,
    /// Instant after which the entry must not be returned
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry expiring `ttl` from now.
    pub fn new(value: Problem, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its expiry instant.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
