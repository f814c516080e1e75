mod business_row;
mod category_icon;
mod distance;
mod price_label;

pub use business_row::BusinessRow;
pub use category_icon::{icon_for, IconKey};
pub use distance::{format_distance, meters_to_miles, round_hundredths, METERS_TO_MILES};
pub use price_label::{format_price_label, StyledText, PRICE_PLACEHOLDER};
