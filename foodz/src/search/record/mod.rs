mod business;
mod search_response;

pub use business::{Business, Category, Coordinates};
pub use search_response::{SearchResponse, SearchResult};
