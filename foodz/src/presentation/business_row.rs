use serde::Serialize;

use super::{format_price_label, icon_for, IconKey, StyledText};
use crate::search::Business;

/// everything a list row shows for one business
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessRow {
    pub name: String,
    pub icon: IconKey,
    pub info_label: StyledText,
    /// handed to the image loader as-is, may be empty
    pub image_url: String,
}

impl From<&Business> for BusinessRow {
    fn from(business: &Business) -> Self {
        let icon = business
            .primary_category()
            .map(|c| icon_for(&c.alias))
            .unwrap_or_default();
        Self {
            name: business.name.clone(),
            icon,
            info_label: format_price_label(business.price.as_deref(), business.distance_meters),
            image_url: business.image_url.clone(),
        }
    }
}
