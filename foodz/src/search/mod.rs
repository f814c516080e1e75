mod business_search;
mod client;
mod client_config;
mod error;
mod query;

pub mod constants;
pub mod record;

pub use business_search::BusinessSearch;
pub use client::YelpSearchClient;
pub use client_config::SearchClientConfig;
pub use error::SearchError;
pub use query::SearchQuery;
pub use record::{Business, Category, Coordinates, SearchResponse, SearchResult};
