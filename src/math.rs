//! Geometric math utilities.
//!
//! Linear interpolation between points and the Bernstein basis
//! that gives the closed form of a de Casteljau evaluation.

use crate::basics::PointD;

// ============================================================================
// Interpolation
// ============================================================================

/// Point at fractional distance `t` from `p1` toward `p2`.
///
/// Each coordinate is interpolated independently. `t` is not clamped, so
/// values outside `[0, 1]` extrapolate along the line.
#[inline]
pub fn lerp(p1: PointD, p2: PointD, t: f64) -> PointD {
    PointD::new(p1.x + (p2.x - p1.x) * t, p1.y + (p2.y - p1.y) * t)
}

// ============================================================================
// Bernstein basis
// ============================================================================

/// Binomial coefficient `C(n, k)` as a double.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut c = 1.0;
    for i in 0..k {
        c = c * (n - i) as f64 / (i + 1) as f64;
    }
    c
}

/// Bernstein basis polynomial `b(i, n)` evaluated at `t`.
///
/// For `t` in `[0, 1]` every weight is non-negative and the `n + 1` weights
/// of degree `n` sum to one.
pub fn bernstein(n: usize, i: usize, t: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// Closed-form Bezier evaluation as a weighted sum of control points.
///
/// Returns `None` for an empty slice.
pub fn bernstein_point(points: &[PointD], t: f64) -> Option<PointD> {
    let n = points.len().checked_sub(1)?;
    let p = points
        .iter()
        .enumerate()
        .fold(PointD::new(0.0, 0.0), |acc, (i, p)| {
            acc + *p * bernstein(n, i, t)
        });
    Some(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = PointD::new(0.0, 1.0);
        let b = PointD::new(2.0, -3.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), PointD::new(1.0, -1.0));
    }

    #[test]
    fn test_lerp_extrapolates() {
        let a = PointD::new(0.0, 0.0);
        let b = PointD::new(1.0, 2.0);
        assert_eq!(lerp(a, b, 2.0), PointD::new(2.0, 4.0));
        assert_eq!(lerp(a, b, -1.0), PointD::new(-1.0, -2.0));
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(6, 0), 1.0);
        assert_eq!(binomial(6, 2), 15.0);
        assert_eq!(binomial(6, 3), 20.0);
        assert_eq!(binomial(6, 6), 1.0);
        assert_eq!(binomial(3, 4), 0.0);
    }

    #[test]
    fn test_bernstein_partition_of_unity() {
        for n in 0..10 {
            for step in 0..=20 {
                let t = step as f64 / 20.0;
                let sum: f64 = (0..=n).map(|i| bernstein(n, i, t)).sum();
                assert_relative_eq!(sum, 1.0, epsilon = EPSILON);
                for i in 0..=n {
                    assert!(bernstein(n, i, t) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_bernstein_point_cubic() {
        let pts = [
            PointD::new(0.0, 0.0),
            PointD::new(0.0, 1.0),
            PointD::new(1.0, 1.0),
            PointD::new(1.0, 0.0),
        ];
        let mid = bernstein_point(&pts, 0.5).unwrap();
        assert_relative_eq!(mid.x, 0.5, epsilon = EPSILON);
        assert_relative_eq!(mid.y, 0.75, epsilon = EPSILON);
        assert!(bernstein_point(&[], 0.5).is_none());
    }
}
