use std::future::Future;

use super::{SearchError, SearchQuery, SearchResult};

/// a back end that answers business searches. the session layer fetches
/// through this trait so the HTTP client can be swapped out.
pub trait BusinessSearch: Send + Sync + 'static {
    /// performs exactly one search. resolves once, with either the decoded
    /// businesses or an error.
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<SearchResult, SearchError>> + Send;
}
