//! Catalog Requests
//!
//! The three request shapes the proxy sends to the RAWG API.

/// Number of games returned for the trending listing
pub const TRENDING_PAGE_SIZE: u32 = 100;

/// Number of games returned for a search
pub const SEARCH_PAGE_SIZE: u32 = 24;

/// A logical outbound request, without the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    /// Most-added games
    Trending,
    /// Free-text game search
    Search { query: String },
    /// Single game detail record
    Details { id: String },
}

impl CatalogRequest {
    pub fn search(query: impl Into<String>) -> Self {
        CatalogRequest::Search {
            query: query.into(),
        }
    }

    pub fn details(id: impl Into<String>) -> Self {
        CatalogRequest::Details { id: id.into() }
    }

    /// Path segments below the API base URL.
    ///
    /// Each segment is encoded separately, so an id containing `/` or `?`
    /// cannot escape the `games/<id>` resource.
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            CatalogRequest::Trending | CatalogRequest::Search { .. } => vec!["games"],
            CatalogRequest::Details { id } => vec!["games", id.as_str()],
        }
    }

    /// Query parameters specific to this request.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            CatalogRequest::Trending => vec![
                ("ordering", "-added".to_string()),
                ("page_size", TRENDING_PAGE_SIZE.to_string()),
            ],
            CatalogRequest::Search { query } => vec![
                ("search", query.clone()),
                ("page_size", SEARCH_PAGE_SIZE.to_string()),
            ],
            CatalogRequest::Details { .. } => Vec::new(),
        }
    }
}
