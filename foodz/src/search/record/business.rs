use geo::Point;
use serde::{Deserialize, Serialize};

/// a single food business as returned by the Yelp Fusion search API.
/// records are immutable once decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    /// price tier as repeated currency symbols, e.g. "$$"
    pub price: Option<String>,
    pub categories: Vec<Category>,
    pub coordinates: Coordinates,
    /// distance from the search location, in meters
    #[serde(rename = "distance")]
    pub distance_meters: f64,
    pub image_url: String,
    pub phone: String,
    #[serde(rename = "url")]
    pub detail_url: Option<String>,
}

impl Business {
    /// the category used for icon selection. Yelp lists the most
    /// relevant category first.
    pub fn primary_category(&self) -> Option<&Category> {
        self.categories.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub alias: String,
    pub title: String,
}

/// WGS84 position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(value: Coordinates) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}
