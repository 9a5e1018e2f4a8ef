//! Cache Store Module
//!
//! Slug-keyed problem cache with a fixed time-to-live per entry.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::cache::{CacheCounters, CacheEntry, CacheStats};
use crate::models::Problem;

// == TTL Cache ==
/// Concurrency-safe mapping from slug to problem snapshot.
///
/// Reads take the shared lock, writes and sweeps take the exclusive lock.
/// Expiry is fixed at write time; reads never extend it.
#[derive(Debug)]
pub struct TtlCache {
    /// Slug to entry storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Lifetime given to every stored entry
    ttl: Duration,
    /// Performance counters
    counters: CacheCounters,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            counters: CacheCounters::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any existing entry.
    pub async fn put(&self, key: impl Into<String>, value: Problem) {
        let entry = CacheEntry::new(value, self.ttl);
        self.entries.write().await.insert(key.into(), entry);
    }

    // == Get ==
    /// Returns the stored problem if present and not yet expired.
    ///
    /// Expired entries are reported as misses even if the sweep has not
    /// removed them yet. Removal is left to the sweep so reads stay on the
    /// shared lock.
    pub async fn get(&self, key: &str) -> Option<Problem> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.counters.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.counters.record_miss();
                None
            }
        }
    }

    // == Sweep Expired ==
    /// Removes every expired entry in one pass under the exclusive lock.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - entries.len();

        self.counters.record_expired(removed);
        removed
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total = self.len().await;
        self.counters.snapshot(total)
    }

    /// Inserts a prebuilt entry, bypassing the configured lifetime.
    #[cfg(test)]
    pub(crate) async fn insert_entry(&self, key: impl Into<String>, entry: CacheEntry) {
        self.entries.write().await.insert(key.into(), entry);
    }
}
