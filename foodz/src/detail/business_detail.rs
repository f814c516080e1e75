use geo::{line_string, Haversine, Length, Point};
use serde::Serialize;

use super::DirectionsRequest;
use crate::search::{Business, Coordinates};

/// detail view model for one business, with the user's location when known
#[derive(Debug, Clone, Serialize)]
pub struct BusinessDetail<'a> {
    pub business: &'a Business,
    pub user_location: Option<Coordinates>,
}

impl<'a> BusinessDetail<'a> {
    pub fn new(business: &'a Business, user_location: Option<Coordinates>) -> Self {
        Self {
            business,
            user_location,
        }
    }

    pub fn name(&self) -> &str {
        &self.business.name
    }

    /// image for the header, None when the business has none
    pub fn image_url(&self) -> Option<&str> {
        Some(self.business.image_url.as_str()).filter(|u| !u.is_empty())
    }

    /// `tel://` link for the call action, None when there is no phone number
    pub fn phone_url(&self) -> Option<String> {
        let phone = self.business.phone.trim();
        if phone.is_empty() {
            None
        } else {
            Some(format!("tel://{phone}"))
        }
    }

    /// the Yelp page offered by the share action
    pub fn share_url(&self) -> Option<&str> {
        self.business.detail_url.as_deref().filter(|u| !u.is_empty())
    }

    /// driving directions from the user to the business, None without a
    /// user location
    pub fn directions_request(&self) -> Option<DirectionsRequest> {
        self.user_location
            .map(|from| DirectionsRequest::driving(from, self.business.coordinates))
    }

    /// great-circle distance from the user to the business in meters
    pub fn straight_line_meters(&self) -> Option<f64> {
        self.user_location.map(|from| {
            let src = Point::from(from);
            let dst = Point::from(self.business.coordinates);
            Haversine.length(&line_string![src.0, dst.0])
        })
    }
}
