//! RAWG Proxy - A small caching proxy for the RAWG game catalog
//!
//! Forwards trending, search and detail requests to the RAWG API, keeps the
//! API key server-side and answers repeated requests from a short-lived
//! in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod proxy;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use proxy::GameService;
pub use tasks::spawn_sweep_task;
