//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, API_KEY_PLACEHOLDER};

/// Public RAWG API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

/// Server configuration parameters.
///
/// Only the API key is required; everything else has a default.
#[derive(Clone)]
pub struct Config {
    /// Secret RAWG API key, forwarded upstream and never exposed to clients
    pub api_key: String,
    /// Upstream API base URL
    pub base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of cached upstream responses in seconds
    pub cache_ttl: u64,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// Expiry sweep interval in seconds, 0 disables the sweep
    pub sweep_interval: u64,
    /// Directory served for non-API paths
    pub static_dir: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present;
    /// variables already set in the process environment win.
    ///
    /// # Environment Variables
    /// - `RAWG_API_KEY` - Upstream API key (required)
    /// - `RAWG_BASE_URL` - Upstream base URL (default: https://api.rawg.io/api)
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL_SECS` - Cache entry lifetime (default: 600)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    /// - `CACHE_SWEEP_INTERVAL` - Expiry sweep frequency, 0 = off (default: 0)
    /// - `STATIC_DIR` - Static file directory (default: public)
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let defaults = Self::with_api_key(String::new());
        let api_key = validate_api_key(env::var("RAWG_API_KEY").ok())?;

        Ok(Self {
            api_key,
            base_url: env::var("RAWG_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            server_port: parse_var("PORT").unwrap_or(defaults.server_port),
            cache_ttl: parse_var("CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.upstream_timeout),
            sweep_interval: parse_var("CACHE_SWEEP_INTERVAL").unwrap_or(defaults.sweep_interval),
            static_dir: env::var("STATIC_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    /// Creates a Config with default settings and the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            server_port: 3000,
            cache_ttl: 600,
            upstream_timeout: 30,
            sweep_interval: 0,
            static_dir: PathBuf::from("public"),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

// The API key must never end up in logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("server_port", &self.server_port)
            .field("cache_ttl", &self.cache_ttl)
            .field("upstream_timeout", &self.upstream_timeout)
            .field("sweep_interval", &self.sweep_interval)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

/// Rejects a missing, blank or placeholder API key.
pub fn validate_api_key(raw: Option<String>) -> Result<String, ConfigError> {
    let key = raw.map(|k| k.trim().to_string()).unwrap_or_default();
    if key.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    if key == API_KEY_PLACEHOLDER {
        return Err(ConfigError::PlaceholderApiKey);
    }
    Ok(key)
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
