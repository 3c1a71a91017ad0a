pub(crate) mod qr;
pub(crate) mod rotation;
pub(crate) mod sweep;

pub use qr::{qr_decomposition, Qr, QrSettings, Variant};
pub use rotation::givens;
pub use sweep::{sweep, zero_small, ColMajor, Layout, RowMajor};

/// Errors from QR decomposition.
///
/// ```
/// use givens_qr::linalg::{qr_decomposition, QrError, QrSettings};
///
/// // a wide 2x3 matrix is rejected before any work is done
/// let x = [1.0_f64; 6];
/// let err = qr_decomposition(&x, 2, 3, &QrSettings::default()).unwrap_err();
/// assert_eq!(err, QrError::InvalidDimension { nrows: 2, ncols: 3, len: 6 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrError {
    /// Shape is not a non-empty tall matrix (`n >= p > 0`), or the data
    /// length disagrees with `n * p`.
    InvalidDimension {
        /// Requested row count `n`.
        nrows: usize,
        /// Requested column count `p`.
        ncols: usize,
        /// Length of the supplied data.
        len: usize,
    },
    /// R has a zero on its diagonal, so back substitution is impossible.
    Singular,
    /// Operation requires a square matrix.
    NotSquare {
        nrows: usize,
        ncols: usize,
    },
}

impl core::fmt::Display for QrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QrError::InvalidDimension { nrows, ncols, len } => write!(
                f,
                "invalid dimensions: {}x{} with {} elements (need rows >= cols > 0 and rows * cols elements)",
                nrows, ncols, len
            ),
            QrError::Singular => write!(f, "matrix is singular"),
            QrError::NotSquare { nrows, ncols } => {
                write!(f, "matrix is not square: {}x{}", nrows, ncols)
            }
        }
    }
}

impl core::error::Error for QrError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        let e = QrError::InvalidDimension { nrows: 2, ncols: 3, len: 6 };
        assert_eq!(
            e.to_string(),
            "invalid dimensions: 2x3 with 6 elements (need rows >= cols > 0 and rows * cols elements)"
        );
        assert_eq!(QrError::Singular.to_string(), "matrix is singular");
        assert_eq!(
            QrError::NotSquare { nrows: 3, ncols: 2 }.to_string(),
            "matrix is not square: 3x2"
        );
    }
}
