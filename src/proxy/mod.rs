//! Proxy Module
//!
//! Request handler adapter: derives the cache key for a logical request,
//! answers from the cache when it can and falls back to the upstream API.

pub mod key;
mod service;

pub use service::{GameService, DETAILS_FAILURE, SEARCH_FAILURE, TRENDING_FAILURE};
