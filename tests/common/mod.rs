#![allow(dead_code)]

use core::fmt;

use givens_qr::FloatScalar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// First element where `Q * R` disagrees with `X`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch<T> {
    pub row: usize,
    pub col: usize,
    pub computed: T,
    pub expected: T,
    pub diff: T,
    pub tol: T,
}

impl<T: fmt::Display> fmt::Display for Mismatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QR[({},{})] = {} != {} (diff {}, tol {})",
            self.row, self.col, self.computed, self.expected, self.diff, self.tol
        )
    }
}

/// Recompute `Q * R` (column-major, `n x p` and `p x p`) and compare it with
/// `X` element-wise. The tolerance is `1e4 * T::epsilon()`.
pub fn validate_qr<T: FloatScalar>(
    x: &[T],
    q: &[T],
    r: &[T],
    n: usize,
    p: usize,
) -> Result<(), Mismatch<T>> {
    let tol = T::epsilon() * T::from(1e4).unwrap();
    for i in 0..n {
        for j in 0..p {
            let mut computed = T::zero();
            for k in 0..p {
                computed = computed + q[k * n + i] * r[j * p + k];
            }
            let expected = x[j * n + i];
            let diff = (expected - computed).abs();
            if diff > tol {
                return Err(Mismatch {
                    row: i,
                    col: j,
                    computed,
                    expected,
                    diff,
                    tol,
                });
            }
        }
    }
    Ok(())
}

/// Column-major `n x p` matrix with entries uniform in `[-1, 1)`.
pub fn random_matrix(n: usize, p: usize, seed: u64) -> Vec<f64> {
    let rng = &mut StdRng::seed_from_u64(seed);
    (0..n * p).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// The size grid of the timing runs: `p = 2, 4, .., 32` and `n = p, 2p, ..`
/// below `max_n`.
pub fn size_grid(max_n: usize) -> Vec<(usize, usize)> {
    let mut sizes = Vec::new();
    let mut p = 2;
    while p < 64 {
        let mut n = p;
        while n < max_n {
            sizes.push((n, p));
            n *= 2;
        }
        p *= 2;
    }
    sizes
}

pub fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!((a - b).abs() < tol, "{}: {} vs {} (diff {})", msg, a, b, (a - b).abs());
}
