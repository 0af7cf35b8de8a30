//! Upstream Module
//!
//! Outbound calls to the game catalog API. Stateless: no caching here.

mod client;
mod request;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

pub use client::RawgClient;
pub use request::{CatalogRequest, SEARCH_PAGE_SIZE, TRENDING_PAGE_SIZE};

/// Performs a single catalog request.
///
/// Implementations return the parsed JSON body on a 2xx response and a
/// [`FetchError`] for anything else.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(&self, request: &CatalogRequest) -> Result<Value, FetchError>;
}
