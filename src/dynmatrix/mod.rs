mod linalg;
mod ops;

pub use linalg::GivensQr;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Dynamically-sized heap-allocated matrix.
///
/// Column-major `Vec<T>` storage, the same layout [`qr_decomposition`]
/// consumes and produces, so decomposing a `DynMatrix` needs no copy
/// beyond the working buffers.
///
/// [`qr_decomposition`]: crate::linalg::qr_decomposition
///
/// # Examples
///
/// ```
/// use givens_qr::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let qr = a.givens_qr().unwrap();
/// assert_eq!(qr.r()[(1, 0)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

fn check_len(len: usize, nrows: usize, ncols: usize) {
    assert_eq!(
        len,
        nrows * ncols,
        "slice length {} does not match {}x{} matrix",
        len,
        nrows,
        ncols,
    );
}

impl<T: Scalar> DynMatrix<T> {
    /// Copy a column-major buffer, the layout [`qr_decomposition`] takes as
    /// input and returns Q and R in.
    ///
    /// Panics if `slice.len() != nrows * ncols`.
    ///
    /// [`qr_decomposition`]: crate::linalg::qr_decomposition
    ///
    /// ```
    /// use givens_qr::DynMatrix;
    /// // columns (1, 1, 1) and (0, 1, 2)
    /// let x = DynMatrix::from_slice(3, 2, &[1.0_f64, 1.0, 1.0, 0.0, 1.0, 2.0]);
    /// assert_eq!(x[(2, 1)], 2.0);
    /// assert_eq!(x.col(0), &[1.0, 1.0, 1.0]);
    /// ```
    pub fn from_slice(nrows: usize, ncols: usize, slice: &[T]) -> Self {
        check_len(slice.len(), nrows, ncols);
        Self::from_vec_unchecked(nrows, ncols, slice.to_vec())
    }

    /// Build from rows written out in reading order; storage stays
    /// column-major.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use givens_qr::DynMatrix;
    /// let a = DynMatrix::from_rows(3, 2, &[
    ///     1.0_f64, 0.0,
    ///     1.0, 1.0,
    ///     1.0, 2.0,
    /// ]);
    /// assert_eq!(a.as_slice(), &[1.0, 1.0, 1.0, 0.0, 1.0, 2.0]);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        check_len(row_major.len(), nrows, ncols);
        Self::from_fn(nrows, ncols, |i, j| row_major[i * ncols + j])
    }
}

impl<T> DynMatrix<T> {
    /// Wrap a buffer whose length is known to be `nrows * ncols`.
    pub(crate) fn from_vec_unchecked(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use givens_qr::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// assert_eq!(m[(1, 2)], 5.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Column-major view of the data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its column-major data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Column `col` as a contiguous slice.
    ///
    /// ```
    /// use givens_qr::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.col(1), &[2.0, 4.0]);
    /// ```
    #[inline]
    pub fn col(&self, col: usize) -> &[T] {
        &self.data[col * self.nrows..(col + 1) * self.nrows]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[col * self.nrows + row]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[col * self.nrows + row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_slice_keeps_column_major() {
        let m = DynMatrix::from_slice(2, 3, &[1.0_f64, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!((m.nrows(), m.ncols()), (2, 3));
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.col(1), &[2.0, 5.0]);
    }

    #[test]
    fn from_rows() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_slice_wrong_length() {
        let _ = DynMatrix::from_slice(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn from_fn_is_column_major() {
        let m = DynMatrix::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
        assert_eq!(m.as_slice(), &[0.0, 2.0, 1.0, 3.0]);
    }

    #[test]
    fn index_mut() {
        let mut m = DynMatrix::from_fn(2, 2, |_, _| 0.0_f64);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m.into_vec(), vec![0.0, 0.0, 5.0, 0.0]);
    }

    #[test]
    fn is_square() {
        assert!(DynMatrix::from_fn(3, 3, |_, _| 0.0_f64).is_square());
        assert!(!DynMatrix::from_fn(2, 3, |_, _| 0.0_f64).is_square());
    }
}
