//! Fixed rotations between local navigation frames.
//!
//! ENU/NED are earth-fixed (East-North-Up, North-East-Down), FLU/FRD are
//! body-fixed (Forward-Left-Up, Forward-Right-Down). Every rotation here is a
//! half turn, so each one is its own inverse.

use glam::{Quat, Vec3};
use std::f32::consts::FRAC_1_SQRT_2;

/// Half turn about the (1, 1, 0) axis: swaps x/y and negates z
pub const ENU_TO_NED: Quat = Quat::from_xyzw(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0);
pub const NED_TO_ENU: Quat = ENU_TO_NED;

/// Half turn about the forward axis: negates y and z
pub const FLU_TO_FRD: Quat = Quat::from_xyzw(1.0, 0.0, 0.0, 0.0);
pub const FRD_TO_FLU: Quat = FLU_TO_FRD;

/// Re-express an ENU vector in NED
pub fn enu_to_ned(v: Vec3) -> Vec3 {
    Vec3::new(v.y, v.x, -v.z)
}

/// Re-express a NED vector in ENU
pub fn ned_to_enu(v: Vec3) -> Vec3 {
    enu_to_ned(v)
}

/// Re-express an FLU vector in FRD
pub fn flu_to_frd(v: Vec3) -> Vec3 {
    Vec3::new(v.x, -v.y, -v.z)
}

/// Re-express an FRD vector in FLU
pub fn frd_to_flu(v: Vec3) -> Vec3 {
    flu_to_frd(v)
}
