//! Background Tasks Module
//!
//! Contains background tasks that may run alongside the server.
//!
//! # Tasks
//! - Expiry sweep: Removes stale cache entries at a configured interval.
//!   Off unless `CACHE_SWEEP_INTERVAL` is set; lookups expire entries lazily anyway.

mod sweep;

pub use sweep::spawn_sweep_task;
