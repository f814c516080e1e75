/// miles per meter
pub const METERS_TO_MILES: f64 = 0.00062137119;

pub fn meters_to_miles(meters: f64) -> f64 {
    meters * METERS_TO_MILES
}

/// rounds to 2 decimal places, halves away from zero (0.125 -> 0.13)
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// renders a distance in meters as miles, e.g. "0.5 miles".
/// whole numbers keep a single decimal place ("1.0 miles").
pub fn format_distance(meters: f64) -> String {
    let miles = round_hundredths(meters_to_miles(meters));
    if miles.fract() == 0.0 {
        format!("{miles:.1} miles")
    } else {
        format!("{miles} miles")
    }
}
