//! Percentage and angle helpers.
//!
//! Canvas geometry is stored as percentages of the canvas bounding box so a
//! design renders the same at any resolution. These helpers convert between
//! pixel deltas and percentages and keep values inside their invariants.

/// Lower bound of every percentage coordinate.
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound of every percentage coordinate.
pub const PERCENT_MAX: f64 = 100.0;

/// Clamps a percentage into [0, 100]. NaN collapses to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return PERCENT_MIN;
    }
    value.clamp(PERCENT_MIN, PERCENT_MAX)
}

/// Converts a pixel delta into a percentage of `extent_px`.
///
/// Returns `None` when the extent is zero, negative or not finite, which
/// happens while the canvas has not been laid out yet.
pub fn px_to_percent(delta_px: f64, extent_px: f64) -> Option<f64> {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return None;
    }
    Some(delta_px / extent_px * PERCENT_MAX)
}

/// Converts a percentage of `extent_px` into pixels.
pub fn percent_to_px(percent: f64, extent_px: f64) -> f64 {
    percent / PERCENT_MAX * extent_px
}

/// Wraps an angle in degrees into [-180, 180].
pub fn normalize_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps +180 onto -180; keep the caller's sign at the seam.
    if wrapped == -180.0 && angle > 0.0 {
        180.0
    } else {
        wrapped
    }
}
