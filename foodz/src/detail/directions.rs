use serde::{Deserialize, Serialize};

use crate::search::Coordinates;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    #[default]
    Automobile,
    Walking,
    Transit,
}

/// a routing request handed to the platform's directions service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRequest {
    pub source: Coordinates,
    pub destination: Coordinates,
    pub transport_type: TransportType,
    pub requests_alternate_routes: bool,
}

impl DirectionsRequest {
    /// driving directions with alternate routes
    pub fn driving(source: Coordinates, destination: Coordinates) -> Self {
        Self {
            source,
            destination,
            transport_type: TransportType::Automobile,
            requests_alternate_routes: true,
        }
    }
}
