use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::constants::{SEARCH_CATEGORIES, SEARCH_RADIUS_METERS, SEARCH_SORT_BY};
use super::SearchError;

/// parameters of one business search. only the location varies between
/// searches; radius, categories and sort order are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: u32,
    pub categories: Vec<String>,
    pub sort_by: String,
}

impl SearchQuery {
    /// builds the fixed query around a location. no range validation is
    /// performed on the coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_meters: SEARCH_RADIUS_METERS,
            categories: SEARCH_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            sort_by: SEARCH_SORT_BY.to_string(),
        }
    }

    /// comma-separated category list as sent to the API
    pub fn categories_param(&self) -> String {
        self.categories.join(",")
    }

    /// appends the query parameters to the search endpoint. the category
    /// list is written with literal commas.
    pub fn to_url(&self, endpoint: &str) -> Result<Url, SearchError> {
        let raw = format!(
            "{endpoint}?latitude={}&longitude={}&radius={}&categories={}&sort_by={}",
            self.latitude,
            self.longitude,
            self.radius_meters,
            self.categories_param(),
            self.sort_by
        );
        Url::parse(&raw)
            .map_err(|e| SearchError::InvalidEndpoint(endpoint.to_string(), e.to_string()))
    }
}
