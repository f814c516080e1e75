use geo::Point;
use serde::{Deserialize, Serialize};

use crate::search::{Business, Coordinates};

/// a map marker. it refers back to its business only through the exact
/// coordinate it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub coordinate: Coordinates,
}

impl Annotation {
    pub fn point(&self) -> Point<f64> {
        self.coordinate.into()
    }
}

impl From<&Business> for Annotation {
    fn from(business: &Business) -> Self {
        Self {
            coordinate: business.coordinates,
        }
    }
}
