use std::f32::consts::{PI, TAU};

/// Wrap an angle in degrees into [0, 360)
///
/// Non-finite input is returned unchanged.
pub fn wrap_360(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return degrees;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wrap an angle in degrees into [-180, 180)
///
/// +180 maps to -180, so the upper bound is never returned.
pub fn wrap_180(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return degrees;
    }
    wrap_360(degrees + 180.0) - 180.0
}

/// Wrap an angle in radians into [-PI, PI)
pub fn wrap_pi(radians: f32) -> f32 {
    if !radians.is_finite() {
        return radians;
    }
    let wrapped = (radians + PI).rem_euclid(TAU);
    if wrapped >= TAU { -PI } else { wrapped - PI }
}
