//! Quaternion helpers shared by the navigator and the intro.

use glam::Quat;

/// Rotation angle (radians, in `[0, pi]`) between two unit quaternions.
///
/// Uses `atan2` on the relative rotation rather than `acos` of the dot
/// product, which loses all precision for small angles in `f32`.
pub fn angular_distance(a: Quat, b: Quat) -> f32 {
    let rel = a.conjugate() * b;
    2.0 * rel.xyz().length().atan2(rel.w.abs())
}

/// Cubic ease-out on `t` in `[0, 1]`.
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out on `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let k = -2.0 * t + 2.0;
        1.0 - k * k * k / 2.0
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn test_angular_distance_basic() {
        let a = Quat::IDENTITY;
        let b = Quat::from_rotation_x(FRAC_PI_2);
        assert!((angular_distance(a, b) - FRAC_PI_2).abs() < 1e-5);
        assert!(angular_distance(b, b) < 1e-6);
    }

    #[test]
    fn test_angular_distance_double_cover() {
        let q = Quat::from_rotation_y(0.3);
        assert!(angular_distance(q, -q) < 1e-6);
    }

    #[test]
    fn test_angular_distance_small_angles() {
        let a = Quat::IDENTITY;
        let b = Quat::from_rotation_z(2e-4);
        assert!((angular_distance(a, b) - 2e-4).abs() < 1e-6);
    }

    #[test]
    fn test_angular_distance_half_turn() {
        let d = angular_distance(Quat::IDENTITY, Quat::from_rotation_y(PI));
        assert!((d - PI).abs() < 1e-5);
    }

    #[test]
    fn test_easing_endpoints() {
        for ease in [ease_out_cubic as fn(f32) -> f32, ease_in_out_cubic] {
            assert_eq!(ease(0.0), 0.0);
            assert_eq!(ease(1.0), 1.0);
            assert!(ease(0.5) > 0.0 && ease(0.5) < 1.0);
            assert_eq!(ease(2.0), 1.0);
        }
    }
}
