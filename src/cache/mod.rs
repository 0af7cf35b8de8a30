//! Cache Module
//!
//! Provides an in-memory key-value store with time-based expiry.

mod entry;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default lifetime of a cached upstream response
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Cache of upstream JSON payloads, keyed by request identity
pub type GameCache = CacheStore<serde_json::Value>;
