//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries, bounding
//! memory held by keys nobody asks for again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::GameCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs until aborted, sleeping for `interval` between runs and
/// taking the write lock only for the purge itself.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(GameCache::new(DEFAULT_CACHE_TTL)));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: Arc<RwLock<GameCache>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "Starting cache expiry sweep");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.purge_expired();

            if removed > 0 {
                info!("Expiry sweep: removed {} stale entries", removed);
            } else {
                debug!("Expiry sweep: no stale entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(GameCache::new(Duration::from_millis(50))));
        cache.write().await.set("trending", json!({"results": []}));

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(100));

        tokio::time::sleep(Duration::from_millis(350)).await;

        // Removed without any lookup
        assert!(cache.read().await.is_empty());

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_preserves_fresh_entries() {
        let cache = Arc::new(RwLock::new(GameCache::new(Duration::from_secs(3600))));
        cache.write().await.set("game_1", json!({"id": 1}));

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.write().await.get("game_1"), Some(json!({"id": 1})));

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_can_be_aborted() {
        let cache = Arc::new(RwLock::new(GameCache::new(Duration::from_secs(60))));

        let handle = spawn_sweep_task(cache, Duration::from_secs(1));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
