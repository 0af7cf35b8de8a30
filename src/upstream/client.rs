//! RAWG API client
//!
//! Performs the outbound HTTP call for a [`CatalogRequest`] and maps every
//! failure onto [`FetchError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::{CatalogFetcher, CatalogRequest};
use crate::error::FetchError;

/// Client for the RAWG game catalog API.
#[derive(Debug, Clone)]
pub struct RawgClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl RawgClient {
    /// Create a client with the given request timeout.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(client, base_url, api_key)
    }

    /// Create a client around an existing reqwest client.
    ///
    /// Fails if `base_url` is not an absolute http(s) URL.
    pub fn with_client(
        client: Client,
        base_url: &str,
        api_key: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url: parsed,
            api_key: api_key.into(),
        })
    }

    /// Full URL for `request`, API key included.
    fn request_url(&self, request: &CatalogRequest) -> Url {
        let mut url = self.base_url.clone();

        // Checked in the constructor: http(s) URLs always have a path
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(request.path_segments());
        }

        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .extend_pairs(request.query_params());

        url
    }
}

#[async_trait]
impl CatalogFetcher for RawgClient {
    async fn fetch(&self, request: &CatalogRequest) -> Result<Value, FetchError> {
        let url = self.request_url(request);
        debug!(request = ?request, "Fetching from RAWG API");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let text = response.text().await?;
        let data: Value = serde_json::from_str(&text)?;

        Ok(data)
    }
}
