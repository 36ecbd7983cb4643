//! Hue arithmetic
//!
//! Angles on the hue wheel wrap at 360 degrees. These helpers keep values in
//! range and pick the shorter arc between two hues.

/// Wrap an angle into `[0, 360)`.
pub fn normalize_hue(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed delta from `from` to `to`, taking the shorter arc.
///
/// The result lies in `(-180, 180]`.
pub fn shortest_hue_delta(from: f32, to: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Whether two hue offsets describe the same rotation within `tolerance`
/// degrees.
pub fn offsets_match(a: f32, b: f32, tolerance: f32) -> bool {
    shortest_hue_delta(a, b).abs() <= tolerance
}
