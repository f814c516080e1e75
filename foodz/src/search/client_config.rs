use serde::{Deserialize, Serialize};

use super::constants::YELP_SEARCH_URL;
use super::SearchError;
use super::YelpSearchClient;

/// Serializable configuration for the search client.
/// Builds to a [`YelpSearchClient`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchClientConfig {
    /// Yelp Fusion API key, sent as a bearer token
    pub api_key: String,
    /// business search endpoint, overridable for testing
    pub endpoint: String,
    /// request timeout in seconds. no timeout when unset
    pub timeout_seconds: Option<u64>,
}

impl Default for SearchClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: String::from(YELP_SEARCH_URL),
            timeout_seconds: None,
        }
    }
}

impl SearchClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            ..Default::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn build(&self) -> Result<YelpSearchClient, SearchError> {
        if self.api_key.trim().is_empty() {
            return Err(SearchError::MissingApiKey);
        }
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|source| SearchError::NetworkError { source })?;
        Ok(YelpSearchClient::new(
            http,
            self.endpoint.clone(),
            self.api_key.clone(),
        ))
    }
}
