use serde::{Deserialize, Serialize};

use super::Business;
use crate::search::SearchError;

/// businesses from one successful fetch, in the order returned by the API
/// (sorted by distance on the server).
pub type SearchResult = Vec<Business>;

/// top-level body of a business search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub businesses: SearchResult,
}

impl SearchResponse {
    pub fn from_slice(body: &[u8]) -> Result<SearchResponse, SearchError> {
        serde_json::from_slice(body).map_err(|source| SearchError::DecodeError { source })
    }
}

impl From<SearchResponse> for SearchResult {
    fn from(value: SearchResponse) -> Self {
        value.businesses
    }
}
