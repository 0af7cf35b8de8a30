//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::GameCache;
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::models::{HealthResponse, StatsResponse};
use crate::proxy::GameService;
use crate::upstream::{CatalogFetcher, RawgClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-backed catalog access
    pub service: GameService,
    /// Directory served for non-API paths
    pub static_dir: PathBuf,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: GameService, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            service,
            static_dir: static_dir.into(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the RAWG client and an empty cache with the configured TTL.
    pub fn from_config(config: &Config) -> std::result::Result<Self, FetchError> {
        let client = RawgClient::new(
            &config.base_url,
            config.api_key.clone(),
            config.upstream_timeout(),
        )?;
        let fetcher: Arc<dyn CatalogFetcher> = Arc::new(client);
        let service = GameService::new(GameCache::new(config.cache_ttl()), fetcher);

        Ok(Self::new(service, config.static_dir.clone()))
    }
}

/// Handler for GET /api/trending
pub async fn trending_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    state.service.trending().await.map(Json)
}

/// Handler for GET /api/search/:query
///
/// The path segment is percent-decoded by the router; the decoded text is
/// used verbatim for the cache key.
pub async fn search_handler(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Value>> {
    state.service.search(&query).await.map(Json)
}

/// Handler for GET /api/game/:id
pub async fn game_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state.service.details(&id).await.map(Json)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.service.cache();
    let cache = cache.read().await;

    Json(StatsResponse::new(&cache.stats(), cache.ttl().as_secs()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
