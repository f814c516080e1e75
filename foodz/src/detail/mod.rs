mod business_detail;
mod directions;

pub use business_detail::BusinessDetail;
pub use directions::{DirectionsRequest, TransportType};
