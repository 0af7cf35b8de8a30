//! Response models for the proxy's own endpoints
//!
//! Upstream payloads are passed through as opaque JSON; only the health,
//! stats and error bodies are defined here.

pub mod responses;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
