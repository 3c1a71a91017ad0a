use crate::traits::FloatScalar;

/// Givens rotation: compute `(c, s)` such that `[c, s; -s, c] * [a; b] = [r; 0]`.
///
/// The ratio is always formed by dividing by the larger magnitude, so it
/// stays in `[-1, 1]` and `1 + t²` can neither overflow nor lose `t` to
/// cancellation. This holds over the whole dynamic range of `T`, including
/// inputs where `a² + b²` itself would overflow.
///
/// `b == 0` yields the identity rotation `(1, 0)`.
///
/// ```
/// use givens_qr::linalg::givens;
///
/// let (c, s) = givens(3.0_f64, 4.0);
/// assert!((c * c + s * s - 1.0).abs() < 1e-15);
/// // the rotated second component vanishes
/// assert!((c * 4.0 - s * 3.0).abs() < 1e-15);
/// // and the norm moves into the first
/// assert!((c * 3.0 + s * 4.0 - 5.0).abs() < 1e-15);
/// ```
#[inline]
pub fn givens<T: FloatScalar>(a: T, b: T) -> (T, T) {
    if b == T::zero() {
        (T::one(), T::zero())
    } else if b.abs() > a.abs() {
        let t = a / b;
        let s = T::one() / (T::one() + t * t).sqrt();
        (s * t, s)
    } else {
        let t = b / a;
        let c = T::one() / (T::one() + t * t).sqrt();
        (c, c * t)
    }
}

/// Apply the rotation `(c, s)` to the pair `(x, y)`.
#[inline(always)]
pub(crate) fn rotate<T: FloatScalar>(c: T, s: T, x: T, y: T) -> (T, T) {
    (c * x + s * y, c * y - s * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
    }

    fn check(a: f64, b: f64) {
        let (c, s) = givens(a, b);
        assert_near(c * c + s * s, 1.0, 1e-15, "c^2 + s^2");
        let (r, z) = rotate(c, s, a, b);
        let scale = a.abs().max(b.abs());
        assert!(z.abs() <= 4e-15 * scale, "residual {} for ({}, {})", z, a, b);
        assert_near(r.abs() / scale, a.hypot(b) / scale, 4e-15, "norm");
    }

    #[test]
    fn annihilates_second_component() {
        check(3.0, 4.0);
        check(4.0, 3.0);
        check(-2.0, 7.5);
        check(1.0, -1.0);
        check(-5.0, -1e-3);
    }

    #[test]
    fn larger_b_branch() {
        // |b| > |a|: (s*t, s) with t = a/b
        let (c, s) = givens(1.0_f64, 2.0);
        let t: f64 = 0.5;
        let expected_s = 1.0 / (1.0 + t * t).sqrt();
        assert_near(s, expected_s, 1e-15, "s");
        assert_near(c, expected_s * t, 1e-15, "c");
    }

    #[test]
    fn larger_a_branch() {
        // |a| >= |b|: (c, c*t) with t = b/a
        let (c, s) = givens(2.0_f64, 1.0);
        let t: f64 = 0.5;
        let expected_c = 1.0 / (1.0 + t * t).sqrt();
        assert_near(c, expected_c, 1e-15, "c");
        assert_near(s, expected_c * t, 1e-15, "s");
    }

    #[test]
    fn equal_magnitudes_take_a_branch() {
        let (c, s) = givens(1.0_f64, 1.0);
        assert_eq!(c, s);
        assert_near(c, core::f64::consts::FRAC_1_SQRT_2, 1e-15, "c");
    }

    #[test]
    fn zero_b_is_identity() {
        assert_eq!(givens(5.0_f64, 0.0), (1.0, 0.0));
        assert_eq!(givens(0.0_f64, 0.0), (1.0, 0.0));
    }

    #[test]
    fn zero_a_swaps() {
        let (c, s) = givens(0.0_f64, 3.0);
        assert_eq!(c, 0.0);
        assert_eq!(s, 1.0);
    }

    #[test]
    fn no_overflow_at_large_magnitudes() {
        let big = 1e300_f64;
        let (c, s) = givens(big, big);
        assert!(c.is_finite() && s.is_finite());
        let (r, z) = rotate(c, s, big, big);
        assert!(r.is_finite());
        assert_near(r / big, core::f64::consts::SQRT_2, 4e-15, "r");
        assert!(z.abs() <= 4e-15 * big);
    }

    #[test]
    fn no_underflow_at_small_magnitudes() {
        check(1e-300, 3e-300);
        check(3e-300, 1e-300);
    }

    #[test]
    fn single_precision() {
        let (c, s) = givens(3.0_f32, 4.0);
        assert!((c - 0.6).abs() < 1e-6);
        assert!((s - 0.8).abs() < 1e-6);
    }
}
