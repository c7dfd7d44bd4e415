// src/domain/color.rs

pub const COLOR_HIGH: &str = "rgb(242, 73, 92)";
pub const COLOR_ABOVE: &str = "#FD8D3C";
pub const COLOR_MEDIUM: &str = "rgb(249, 186, 143)";
pub const COLOR_LOW: &str = "rgb(138, 184, 255)";

/// Buckets a net yield percentage (e.g. `7.0` for 7%) into a marker color.
/// Comparisons are strict, so a value sitting on a boundary falls into the
/// lower bucket. NaN falls through to the lowest bucket.
pub fn get_color(yield_percent: f64) -> &'static str {
    if yield_percent > 6.0 {
        COLOR_HIGH
    } else if yield_percent > 5.0 {
        COLOR_ABOVE
    } else if yield_percent > 4.0 {
        COLOR_MEDIUM
    } else {
        COLOR_LOW
    }
}
