//! Error types for the proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Placeholder value shipped in example `.env` files.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_RAWG_API_KEY_HERE";

// == Config Error ==
/// Startup configuration problems. Fatal: the server must not start.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Required API key is missing or empty
    #[error("RAWG_API_KEY is not set")]
    MissingApiKey,

    /// API key was left at the example placeholder
    #[error("RAWG_API_KEY is still set to the placeholder value")]
    PlaceholderApiKey,
}

// == Fetch Error ==
/// Failure of a single upstream catalog call.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Upstream answered with a non-success status
    #[error("RAWG API responded with {0}")]
    Status(reqwest::StatusCode),

    /// Network, DNS, TLS or timeout failure
    #[error("RAWG API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Configured base URL is not an absolute http(s) URL
    #[error("Invalid RAWG API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Response body was not valid JSON
    #[error("Failed to parse RAWG API response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter
        FetchError::Transport(err.without_url())
    }
}

// == Api Error ==
/// Failure reported to HTTP clients.
///
/// Only carries a fixed message; the underlying cause is logged where the
/// error is created and never sent to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    message: &'static str,
}

impl ApiError {
    /// Creates an ApiError with a fixed client-facing message.
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.message));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for proxy operations.
pub type Result<T> = std::result::Result<T, ApiError>;
