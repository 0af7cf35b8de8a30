//! Cache Entry Module
//!
//! Defines a single cached value together with the moment it was stored.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and storage time.
///
/// Entries are immutable once created; a fresh `set` replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stored at `now_ms`.
    pub fn new(value: V, now_ms: u64) -> Self {
        Self {
            value,
            stored_at: now_ms,
        }
    }

    // == Age ==
    /// Returns how long the entry has been stored, in milliseconds.
    ///
    /// Saturates at zero if the clock moved backwards.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl_ms` at time `now_ms`.
    ///
    /// Boundary condition: the entry expires only once its age is strictly
    /// greater than the TTL. An entry exactly `ttl_ms` old is still valid.
    pub fn is_expired_at(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A system clock set before the epoch is reported as 0.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL_MS: u64 = 10 * 60 * 1000;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string(), 1_000);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.stored_at, 1_000);
        assert!(!entry.is_expired_at(1_000, TTL_MS));
    }

    #[test]
    fn test_entry_age() {
        let entry = CacheEntry::new(1u32, 5_000);

        assert_eq!(entry.age_ms(5_000), 0);
        assert_eq!(entry.age_ms(7_500), 2_500);
    }

    #[test]
    fn test_entry_age_clock_skew() {
        let entry = CacheEntry::new(1u32, 5_000);

        // Clock moved backwards, age saturates instead of underflowing
        assert_eq!(entry.age_ms(4_000), 0);
        assert!(!entry.is_expired_at(4_000, TTL_MS));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("v", 0);

        assert!(!entry.is_expired_at(TTL_MS - 1, TTL_MS));
        assert!(entry.is_expired_at(TTL_MS + 1, TTL_MS));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("v", 0);

        // Exactly TTL old is not yet expired
        assert!(
            !entry.is_expired_at(TTL_MS, TTL_MS),
            "Entry should still be valid at boundary"
        );
    }

    #[test]
    fn test_current_timestamp_is_monotonic_enough() {
        let a = current_timestamp_ms();
        let b = current_timestamp_ms();
        assert!(b >= a);
        assert!(a > 0);
    }
}
