//! Angle utilities shared by the line primitive and the classifier.

use std::f32::consts::{FRAC_PI_2, PI};

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f32) -> f32 {
    let norm = angle.rem_euclid(PI);
    if norm >= PI - 1e-6 {
        0.0
    } else {
        norm
    }
}

/// Smallest unsigned difference between two undirected orientations
/// (π apart → 0). Returns a value in [0, π/2].
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).abs();
    if diff > PI {
        diff = diff.rem_euclid(PI);
    }
    if diff > FRAC_PI_2 {
        PI - diff
    } else {
        diff
    }
}

/// Signed direction `atan2(dy, dx)` of the vector from `p0` to `p1`, in (−π, π].
#[inline]
pub fn direction(p0: [i32; 2], p1: [i32; 2]) -> f32 {
    let dx = (p1[0] - p0[0]) as f32;
    let dy = (p1[1] - p0[1]) as f32;
    dy.atan2(dx)
}

/// True when a signed direction lies strictly within `tol` of 0, π or −π.
#[inline]
pub fn is_horizontal(angle: f32, tol: f32) -> bool {
    angle.abs() < tol || (angle - PI).abs() < tol || (angle + PI).abs() < tol
}

/// True when a signed direction lies strictly within `tol` of ±π/2.
#[inline]
pub fn is_vertical(angle: f32, tol: f32) -> bool {
    (angle - FRAC_PI_2).abs() < tol || (angle + FRAC_PI_2).abs() < tol
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn normalize_half_pi_folds_into_range() {
        assert!(approx_eq(normalize_half_pi(0.5), 0.5));
        assert!(approx_eq(normalize_half_pi(-FRAC_PI_4), 3.0 * FRAC_PI_4));
        assert!(approx_eq(normalize_half_pi(PI), 0.0));
    }

    #[test]
    fn angular_difference_handles_wrap() {
        assert!(approx_eq(angular_difference(0.0, PI), 0.0));
        assert!(approx_eq(angular_difference(0.0, FRAC_PI_2), FRAC_PI_2));
        assert!(approx_eq(
            angular_difference(0.25, 1.7),
            angular_difference(1.7, 0.25)
        ));
    }

    #[test]
    fn direction_covers_all_quadrants() {
        assert!(approx_eq(direction([0, 0], [10, 0]), 0.0));
        assert!(approx_eq(direction([10, 0], [0, 0]), PI));
        assert!(approx_eq(direction([0, 0], [0, 10]), FRAC_PI_2));
        assert!(approx_eq(direction([0, 10], [0, 0]), -FRAC_PI_2));
    }

    #[test]
    fn orientation_tests_are_strict() {
        assert!(is_horizontal(0.1, FRAC_PI_6));
        assert!(is_horizontal(-PI + 0.1, FRAC_PI_6));
        assert!(!is_horizontal(FRAC_PI_6, FRAC_PI_6));
        assert!(is_vertical(FRAC_PI_2 + 0.2, FRAC_PI_6));
        assert!(is_vertical(-FRAC_PI_2, FRAC_PI_6));
        assert!(!is_vertical(FRAC_PI_4, FRAC_PI_6));
    }
}
