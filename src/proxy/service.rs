//! Game Service
//!
//! Composes the expiring cache with the upstream fetcher for each logical
//! endpoint.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::key;
use crate::cache::{CacheStats, GameCache};
use crate::error::{ApiError, Result};
use crate::upstream::{CatalogFetcher, CatalogRequest};

pub const TRENDING_FAILURE: &str = "Failed to fetch trending games";
pub const SEARCH_FAILURE: &str = "Failed to search games";
pub const DETAILS_FAILURE: &str = "Failed to fetch game details";

/// Cache-backed access to the game catalog.
///
/// Cheap to clone; clones share the same cache and fetcher. The cache lock is
/// only held for a single lookup or insert and never across the upstream
/// call, so concurrent misses for one key may each fetch and the last insert
/// wins.
#[derive(Clone)]
pub struct GameService {
    cache: Arc<RwLock<GameCache>>,
    fetcher: Arc<dyn CatalogFetcher>,
}

impl GameService {
    /// Creates a service that owns `cache`.
    pub fn new(cache: GameCache, fetcher: Arc<dyn CatalogFetcher>) -> Self {
        Self::with_shared_cache(Arc::new(RwLock::new(cache)), fetcher)
    }

    /// Creates a service over a cache shared with other owners (e.g. the sweep task).
    pub fn with_shared_cache(
        cache: Arc<RwLock<GameCache>>,
        fetcher: Arc<dyn CatalogFetcher>,
    ) -> Self {
        Self { cache, fetcher }
    }

    pub fn cache(&self) -> Arc<RwLock<GameCache>> {
        self.cache.clone()
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Most-added games, up to 100.
    pub async fn trending(&self) -> Result<Value> {
        self.cached_fetch(CatalogRequest::Trending, TRENDING_FAILURE)
            .await
    }

    /// Games matching `query`, up to 24.
    pub async fn search(&self, query: &str) -> Result<Value> {
        self.cached_fetch(CatalogRequest::search(query), SEARCH_FAILURE)
            .await
    }

    /// Detail record for a single game.
    pub async fn details(&self, id: &str) -> Result<Value> {
        self.cached_fetch(CatalogRequest::details(id), DETAILS_FAILURE)
            .await
    }

    async fn cached_fetch(&self, request: CatalogRequest, failure: &'static str) -> Result<Value> {
        let cache_key = key::for_request(&request);

        // get() may delete a stale entry, so it needs the write lock
        let cached = self.cache.write().await.get(&cache_key);
        if let Some(data) = cached {
            return Ok(data);
        }

        match self.fetcher.fetch(&request).await {
            Ok(data) => {
                self.cache.write().await.set(cache_key.clone(), data.clone());
                info!(key = %cache_key, "Cached fresh upstream response");
                Ok(data)
            }
            Err(err) => {
                error!(key = %cache_key, error = %err, "{}", failure);
                Err(ApiError::new(failure))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::DEFAULT_CACHE_TTL;
    use crate::error::FetchError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Fetcher that echoes the request back and counts calls.
    #[derive(Default)]
    struct EchoFetcher {
        calls: AtomicUsize,
        seen: Mutex<Vec<CatalogRequest>>,
        delay: Option<Duration>,
    }

    impl EchoFetcher {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogFetcher for EchoFetcher {
        async fn fetch(&self, request: &CatalogRequest) -> std::result::Result<Value, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(json!({ "request": format!("{:?}", request) }))
        }
    }

    /// Fetcher that always answers with an HTTP status failure.
    struct StatusFetcher {
        status: reqwest::StatusCode,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogFetcher for StatusFetcher {
        async fn fetch(&self, _request: &CatalogRequest) -> std::result::Result<Value, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::Status(self.status))
        }
    }

    fn service_with(fetcher: Arc<dyn CatalogFetcher>) -> GameService {
        GameService::new(GameCache::new(DEFAULT_CACHE_TTL), fetcher)
    }

    #[tokio::test]
    async fn test_miss_then_hit_fetches_once() {
        let fetcher = Arc::new(EchoFetcher::default());
        let service = service_with(fetcher.clone());

        let first = service.trending().await.unwrap();
        let second = service.trending().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(
            fetcher.seen.lock().unwrap().as_slice(),
            &[CatalogRequest::Trending]
        );
    }

    #[tokio::test]
    async fn test_hit_does_not_touch_fetcher() {
        let fetcher = Arc::new(EchoFetcher::default());
        let service = service_with(fetcher.clone());
        let cached = json!({"results": [{"id": 1, "name": "Portal"}]});

        service.cache().write().await.set("game_1", cached.clone());

        assert_eq!(service.details("1").await.unwrap(), cached);
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_keys_are_case_sensitive() {
        let fetcher = Arc::new(EchoFetcher::default());
        let service = service_with(fetcher.clone());

        service.search("zelda").await.unwrap();
        service.search("Zelda").await.unwrap();
        service.search("zelda").await.unwrap();

        assert_eq!(fetcher.calls(), 2);
        let cache = service.cache();
        let cache = cache.read().await;
        assert!(cache.contains_key("search_zelda"));
        assert!(cache.contains_key("search_Zelda"));
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_details_failure_is_not_cached() {
        let fetcher = Arc::new(StatusFetcher {
            status: reqwest::StatusCode::NOT_FOUND,
            calls: AtomicUsize::new(0),
        });
        let service = service_with(fetcher.clone());

        let err = service.details("123").await.unwrap_err();
        assert_eq!(err.message(), DETAILS_FAILURE);
        assert!(!service.cache().read().await.contains_key("game_123"));

        // No negative caching: the next call goes upstream again
        let _ = service.details("123").await;
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_messages_per_endpoint() {
        let fetcher = Arc::new(StatusFetcher {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            calls: AtomicUsize::new(0),
        });
        let service = service_with(fetcher);

        assert_eq!(service.trending().await.unwrap_err().message(), TRENDING_FAILURE);
        assert_eq!(service.search("x").await.unwrap_err().message(), SEARCH_FAILURE);
        assert_eq!(service.details("1").await.unwrap_err().message(), DETAILS_FAILURE);
        assert!(service.cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_misses_same_key() {
        let fetcher = Arc::new(EchoFetcher {
            delay: Some(Duration::from_millis(50)),
            ..Default::default()
        });
        let service = service_with(fetcher.clone());

        let (a, b) = tokio::join!(service.search("mario"), service.search("mario"));

        assert_eq!(a.unwrap(), b.unwrap());
        // No coalescing: each call may fetch, but never more than once
        let calls = fetcher.calls();
        assert!((1..=2).contains(&calls), "unexpected fetch count {}", calls);

        let cache = service.cache();
        let cache = cache.read().await;
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_key("search_mario"));
    }

    #[tokio::test]
    async fn test_expired_entry_is_refetched() {
        let fetcher = Arc::new(EchoFetcher::default());
        let service = GameService::new(GameCache::new(Duration::from_millis(20)), fetcher.clone());

        service.trending().await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        service.trending().await.unwrap();

        assert_eq!(fetcher.calls(), 2);
        let stats = service.stats().await;
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
