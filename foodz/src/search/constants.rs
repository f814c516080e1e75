/// Yelp Fusion business search endpoint
pub const YELP_SEARCH_URL: &str = "https://api.yelp.com/v3/businesses/search";

/// search radius around the fix, in meters
pub const SEARCH_RADIUS_METERS: u32 = 1000;

/// category aliases sent with every search, in request order
pub const SEARCH_CATEGORIES: [&str; 4] = ["pizza", "mexican", "chinese", "burgers"];

pub const SEARCH_SORT_BY: &str = "distance";

/// location used when no fix has been provided (Times Square, NYC)
pub const DEFAULT_LATITUDE: f64 = 40.758896;
pub const DEFAULT_LONGITUDE: f64 = -73.985130;
