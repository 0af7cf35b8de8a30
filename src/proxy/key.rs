//! Cache Keys
//!
//! Keys are built from the raw request identity with no normalization, so
//! `search_zelda` and `search_Zelda` are cached independently.

use crate::upstream::CatalogRequest;

pub const TRENDING_KEY: &str = "trending";
pub const SEARCH_PREFIX: &str = "search_";
pub const GAME_PREFIX: &str = "game_";

pub fn trending() -> String {
    TRENDING_KEY.to_string()
}

pub fn search(query: &str) -> String {
    format!("{}{}", SEARCH_PREFIX, query)
}

pub fn game(id: &str) -> String {
    format!("{}{}", GAME_PREFIX, id)
}

/// Cache key for the given catalog request.
pub fn for_request(request: &CatalogRequest) -> String {
    match request {
        CatalogRequest::Trending => trending(),
        CatalogRequest::Search { query } => search(query),
        CatalogRequest::Details { id } => game(id),
    }
}
