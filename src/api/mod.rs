//! API Module
//!
//! HTTP handlers and routing for the proxy.
//!
//! # Endpoints
//! - `GET /api/trending` - Most-added games
//! - `GET /api/search/:query` - Search games by name
//! - `GET /api/game/:id` - Details for one game
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
