//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    game_handler, health_handler, search_handler, stats_handler, trending_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/trending` - Most-added games
/// - `GET /api/search/:query` - Game search
/// - `GET /api/game/:id` - Game details
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
/// - anything else - Static files from the configured directory (`/` serves `index.html`)
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/api/trending", get(trending_handler))
        .route("/api/search/:query", get(search_handler))
        .route("/api/game/:id", get(game_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
