use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::{qr_decomposition, QrError, QrSettings};
use crate::traits::FloatScalar;

use super::DynMatrix;

// ── GivensQr ────────────────────────────────────────────────────────

/// QR decomposition of a dynamically-sized matrix (M >= N) by Givens rotations.
///
/// Holds the thin Q (M × N) and the upper-triangular R (N × N).
///
/// # Example
///
/// ```
/// use givens_qr::DynMatrix;
///
/// let a = DynMatrix::from_rows(3, 2, &[
///     1.0_f64, 0.0,
///     1.0, 1.0,
///     1.0, 2.0,
/// ]);
/// let x = a.givens_qr().unwrap().solve(&[1.0, 2.0, 4.0]).unwrap();
/// assert!((x[0] - 5.0 / 6.0).abs() < 1e-10);
/// assert!((x[1] - 3.0 / 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GivensQr<T> {
    q: DynMatrix<T>,
    r: DynMatrix<T>,
}

impl<T: FloatScalar> GivensQr<T> {
    /// Decompose with default settings.
    pub fn new(a: &DynMatrix<T>) -> Result<Self, QrError>
    where
        QrSettings<T>: Default,
    {
        Self::with_settings(a, &QrSettings::default())
    }

    /// Decompose with explicit tolerance, layout variant and cleanup choice.
    pub fn with_settings(a: &DynMatrix<T>, settings: &QrSettings<T>) -> Result<Self, QrError> {
        let qr = qr_decomposition(a.as_slice(), a.nrows(), a.ncols(), settings)?;
        let (q, r) = qr.into_matrices();
        Ok(Self { q, r })
    }

    /// The thin Q factor (M × N, orthonormal columns).
    pub fn q(&self) -> &DynMatrix<T> {
        &self.q
    }

    /// The upper-triangular R factor (N × N).
    pub fn r(&self) -> &DynMatrix<T> {
        &self.r
    }

    /// Solve the least-squares problem min ||Ax - b|| for x.
    ///
    /// Computes x = R⁻¹ Qᵗ b by back substitution. Returns
    /// [`QrError::Singular`] if R has a zero on its diagonal.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, QrError> {
        let m = self.q.nrows();
        let n = self.q.ncols();
        assert_eq!(b.len(), m, "rhs length mismatch");

        let mut x = vec![T::zero(); n];
        for (j, xj) in x.iter_mut().enumerate() {
            let mut dot = T::zero();
            for (&qij, &bi) in self.q.col(j).iter().zip(b.iter()) {
                dot = dot + qij * bi;
            }
            *xj = dot;
        }

        for i in (0..n).rev() {
            let d = self.r[(i, i)];
            if d == T::zero() {
                return Err(QrError::Singular);
            }
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum = sum - self.r[(i, j)] * x[j];
            }
            x[i] = sum / d;
        }

        Ok(x)
    }

    /// Determinant of the original matrix (square only).
    ///
    /// Every Givens rotation has determinant +1, so this is exactly the
    /// product of the diagonal of R, sign included.
    ///
    /// ```
    /// use givens_qr::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let det = a.givens_qr().unwrap().det().unwrap();
    /// assert!((det - 10.0).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> Result<T, QrError> {
        if !self.q.is_square() {
            return Err(QrError::NotSquare {
                nrows: self.q.nrows(),
                ncols: self.q.ncols(),
            });
        }
        let mut d = T::one();
        for i in 0..self.r.nrows() {
            d = d * self.r[(i, i)];
        }
        Ok(d)
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// QR decomposition by Givens rotations with default settings.
    ///
    /// ```
    /// use givens_qr::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[3.0_f64, 1.0, 4.0, 2.0]);
    /// let qr = a.givens_qr().unwrap();
    /// let prod = qr.q() * qr.r();
    /// assert!((prod[(1, 0)] - 4.0).abs() < 1e-12);
    /// assert_eq!(qr.r()[(1, 0)], 0.0);
    /// ```
    pub fn givens_qr(&self) -> Result<GivensQr<T>, QrError>
    where
        QrSettings<T>: Default,
    {
        GivensQr::new(self)
    }
}
