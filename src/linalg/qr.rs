use alloc::vec::Vec;

use log::debug;

use crate::dynmatrix::DynMatrix;
use crate::linalg::sweep::{sweep_copy, zero_small, ColMajor, Layout, RowMajor};
use crate::linalg::QrError;
use crate::traits::FloatScalar;

/// Working memory layout used by the elimination sweep.
///
/// Both variants compute the same factorization; they differ only in how the
/// working R and Qᵗ are laid out while rotations are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Work on the input as given (column-major). Row updates stride by `n`.
    #[default]
    Baseline,
    /// Transpose the input once so that row updates are contiguous.
    /// Usually faster for tall matrices.
    Transposed,
}

/// Settings for [`qr_decomposition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrSettings<T> {
    /// Entries of R with magnitude below this become exactly zero after the
    /// sweep.
    ///
    /// Default: `1e-8` for `f64`. The `f32` default is `1e-5` instead, since
    /// single-precision rounding noise alone is around `1e-7`; pass `1e-8`
    /// explicitly to get the `f64` threshold.
    pub tol: T,
    /// Working layout (default: [`Variant::Baseline`]).
    pub variant: Variant,
    /// Whether to run the cleanup pass at all (default: true). Without it,
    /// small non-zero entries above the diagonal and sub-normal entries the
    /// sweep skipped stay in R.
    pub cleanup: bool,
}

impl Default for QrSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-8,
            variant: Variant::Baseline,
            cleanup: true,
        }
    }
}

impl Default for QrSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            variant: Variant::Baseline,
            cleanup: true,
        }
    }
}

impl<T> QrSettings<T> {
    /// Same settings with a different layout variant.
    pub fn with_variant(self, variant: Variant) -> Self {
        Self { variant, ..self }
    }
}

/// Result of [`qr_decomposition`]: thin Q (`n x p`) and square R (`p x p`),
/// both column-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Qr<T> {
    q: Vec<T>,
    r: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T> Qr<T> {
    /// Q as a flat column-major slice of length `n * p`.
    #[inline]
    pub fn q(&self) -> &[T] {
        &self.q
    }

    /// R as a flat column-major slice of length `p * p`.
    #[inline]
    pub fn r(&self) -> &[T] {
        &self.r
    }

    /// Number of rows of the decomposed matrix (`n`).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns of the decomposed matrix (`p`).
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Split into `(q, r)` flat buffers.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.q, self.r)
    }

    /// Split into `(Q, R)` matrices.
    pub fn into_matrices(self) -> (DynMatrix<T>, DynMatrix<T>) {
        let (n, p) = (self.nrows, self.ncols);
        (
            DynMatrix::from_vec_unchecked(n, p, self.q),
            DynMatrix::from_vec_unchecked(p, p, self.r),
        )
    }
}

impl<T: Copy> Qr<T> {
    /// Q as an `n x p` matrix.
    pub fn q_matrix(&self) -> DynMatrix<T> {
        DynMatrix::from_vec_unchecked(self.nrows, self.ncols, self.q.clone())
    }

    /// R as a `p x p` matrix.
    pub fn r_matrix(&self) -> DynMatrix<T> {
        DynMatrix::from_vec_unchecked(self.ncols, self.ncols, self.r.clone())
    }
}

/// Check the shape preconditions of a decomposition.
pub(crate) fn check_dimensions(len: usize, n: usize, p: usize) -> Result<(), QrError> {
    let len_ok = n.checked_mul(p).is_some_and(|np| np == len);
    if n == 0 || p == 0 || p > n || !len_ok {
        return Err(QrError::InvalidDimension {
            nrows: n,
            ncols: p,
            len,
        });
    }
    Ok(())
}

/// QR decomposition of a column-major `n x p` matrix (`n >= p`) by Givens rotations.
///
/// Returns Q with orthonormal columns (`n x p`) and upper-triangular R
/// (`p x p`) such that `Q * R ≈ X`. With `settings.cleanup` every entry of R
/// below `settings.tol` in magnitude is exactly zero, in particular the whole
/// sub-diagonal.
///
/// Returns [`QrError::InvalidDimension`] when `n == 0`, `p == 0`, `p > n` or
/// `x.len() != n * p`. Non-finite input is not checked and propagates.
///
/// # Example
///
/// ```
/// use givens_qr::linalg::{qr_decomposition, QrSettings};
///
/// // column-major 3x2 with columns (1, 1, 1) and (0, 1, 2)
/// let x = [1.0_f64, 1.0, 1.0, 0.0, 1.0, 2.0];
/// let qr = qr_decomposition(&x, 3, 2, &QrSettings::default()).unwrap();
/// let r = qr.r();
/// assert!((r[0] - 3.0_f64.sqrt()).abs() < 1e-12);
/// assert_eq!(r[1], 0.0); // R[(1, 0)]
/// ```
pub fn qr_decomposition<T: FloatScalar>(
    x: &[T],
    n: usize,
    p: usize,
    settings: &QrSettings<T>,
) -> Result<Qr<T>, QrError> {
    check_dimensions(x.len(), n, p)?;
    let qr = match settings.variant {
        Variant::Baseline => decompose::<T, ColMajor>(x, n, p, settings),
        Variant::Transposed => decompose::<T, RowMajor>(x, n, p, settings),
    };
    Ok(qr)
}

fn decompose<T: FloatScalar, L: Layout>(
    x: &[T],
    n: usize,
    p: usize,
    settings: &QrSettings<T>,
) -> Qr<T> {
    let (mut q, mut r, applied) = sweep_copy::<T, L>(x, n, p);
    if settings.cleanup {
        zero_small(&mut r, settings.tol);
    }
    L::finish_q(&mut q, n, p);
    L::finish_r(&mut r, n, p);
    debug!(
        "givens qr {}x{} ({:?}): {} rotations",
        n, p, settings.variant, applied
    );
    Qr {
        q,
        r,
        nrows: n,
        ncols: p,
    }
}
