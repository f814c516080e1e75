use serde::{Deserialize, Serialize};

use crate::search::{constants::SEARCH_RADIUS_METERS, Coordinates};

/// visible map area centered on the user's fix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: Coordinates,
    pub latitudinal_meters: f64,
    pub longitudinal_meters: f64,
}

impl MapRegion {
    /// a square region spanning the search radius in each direction
    pub fn around(center: Coordinates) -> Self {
        Self {
            center,
            latitudinal_meters: SEARCH_RADIUS_METERS as f64,
            longitudinal_meters: SEARCH_RADIUS_METERS as f64,
        }
    }
}
