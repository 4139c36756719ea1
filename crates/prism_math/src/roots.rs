//! Quadratic root helpers shared by the sphere and cylinder intersectors.

use crate::Interval;

/// Returns `(min(a, b), max(a, b))`.
#[inline]
pub fn sort_pair(a: f32, b: f32) -> (f32, f32) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// Picks the smaller of two roots that lies strictly inside `ray_t`,
/// falling back to the larger one.
///
/// Returns `None` when neither root qualifies.
#[inline]
pub fn smallest_root_in_interval(t0: f32, t1: f32, ray_t: Interval) -> Option<f32> {
    let (near, far) = sort_pair(t0, t1);

    if ray_t.surrounds(near) {
        Some(near)
    } else if ray_t.surrounds(far) {
        Some(far)
    } else {
        None
    }
}

/// Solves `a·t² + b·t + c = 0`, returning both roots (unordered).
///
/// Only strictly positive `a` and a strictly positive discriminant produce
/// roots. A tangent (discriminant exactly zero) counts as a miss, as does
/// any NaN input.
#[inline]
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    if a.is_nan() || a <= 0.0 {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant.is_nan() || discriminant <= 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    Some(((-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_pair() {
        assert_eq!(sort_pair(5.0, 2.0), (2.0, 5.0));
        assert_eq!(sort_pair(2.0, 5.0), (2.0, 5.0));
        assert_eq!(sort_pair(-1.0, -1.0), (-1.0, -1.0));
    }

    #[test]
    fn test_smaller_root_wins() {
        let ray_t = Interval::new(0.0, 10.0);
        assert_eq!(smallest_root_in_interval(5.0, 2.0, ray_t), Some(2.0));
    }

    #[test]
    fn test_negative_root_falls_back_to_larger() {
        let ray_t = Interval::new(0.0, 10.0);
        assert_eq!(smallest_root_in_interval(-5.0, 2.0, ray_t), Some(2.0));
    }

    #[test]
    fn test_no_root_in_interval() {
        let ray_t = Interval::new(0.0, 10.0);
        assert_eq!(smallest_root_in_interval(-5.0, -2.0, ray_t), None);
        assert_eq!(smallest_root_in_interval(11.0, 20.0, ray_t), None);

        // Bounds themselves are excluded
        assert_eq!(smallest_root_in_interval(0.0, 10.0, ray_t), None);
    }

    #[test]
    fn test_solve_quadratic() {
        // (t - 1)(t - 3) = t² - 4t + 3
        let (t0, t1) = solve_quadratic(1.0, -4.0, 3.0).unwrap();
        assert_eq!(sort_pair(t0, t1), (1.0, 3.0));
    }

    #[test]
    fn test_solve_quadratic_tangent_is_miss() {
        // (t - 2)² = t² - 4t + 4
        assert_eq!(solve_quadratic(1.0, -4.0, 4.0), None);
    }

    #[test]
    fn test_solve_quadratic_degenerate() {
        assert_eq!(solve_quadratic(0.0, 1.0, -1.0), None);
        assert_eq!(solve_quadratic(-1.0, 0.0, 1.0), None);
        assert_eq!(solve_quadratic(f32::NAN, 1.0, 1.0), None);
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0), None);
    }
}
