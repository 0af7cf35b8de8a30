//! Cache Store Module
//!
//! Time-based key-value store with lazy expiry on lookup.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Expiring key-value store.
///
/// Every entry carries the time it was stored and is treated as gone once it
/// is older than the store's TTL. Expired entries are only removed when they
/// are looked up (or by an explicit [`CacheStore::purge_expired`] call), so
/// there is no size bound and no eviction other than time.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
    /// Time-to-live in milliseconds, shared by every entry
    ttl_ms: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty CacheStore whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_ms: ttl.as_millis() as u64,
        }
    }

    /// Returns the TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    // == Set ==
    /// Stores `value` under `key`, overwriting any previous entry.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.set_at(key, value, current_timestamp_ms());
    }

    /// Same as [`CacheStore::set`] with an explicit clock reading (Unix ms).
    pub fn set_at(&mut self, key: impl Into<String>, value: V, now_ms: u64) {
        let key = key.into();
        debug!(key = %key, "CACHE SET");
        self.entries.insert(key, CacheEntry::new(value, now_ms));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// Returns `None` when the key is absent. When the entry is older than
    /// the TTL it is deleted and `None` is returned.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, current_timestamp_ms())
    }

    /// Same as [`CacheStore::get`] with an explicit clock reading (Unix ms).
    pub fn get_at(&mut self, key: &str, now_ms: u64) -> Option<V> {
        let expired = match self.entries.get(key) {
            None => {
                debug!(key = %key, "CACHE MISS");
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired_at(now_ms, self.ttl_ms),
        };

        if expired {
            debug!(key = %key, "CACHE EXPIRED");
            self.entries.remove(key);
            self.stats.record_expired();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        debug!(key = %key, "CACHE HIT");
        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(current_timestamp_ms())
    }

    /// Same as [`CacheStore::purge_expired`] with an explicit clock reading.
    pub fn purge_expired_at(&mut self, now_ms: u64) -> usize {
        let ttl_ms = self.ttl_ms;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired_at(now_ms, ttl_ms));
        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an entry (fresh or stale) is stored under `key`.
    ///
    /// Does not touch statistics or expire anything.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
