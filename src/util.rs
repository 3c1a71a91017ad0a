//! Flat-buffer helpers shared by the sweep and [`DynMatrix`](crate::DynMatrix).

use alloc::vec;
use alloc::vec::Vec;

use crate::traits::Scalar;

/// `n x n` identity matrix as a flat buffer.
///
/// The layout is irrelevant: the identity is symmetric.
///
/// ```
/// use givens_qr::util::identity;
/// let id = identity::<f64>(2);
/// assert_eq!(id, vec![1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn identity<T: Scalar>(n: usize) -> Vec<T> {
    let mut data = vec![T::zero(); n * n];
    for i in 0..n {
        data[i * n + i] = T::one();
    }
    data
}

/// Transpose an `n x n` matrix stored in `data` in place.
///
/// Panics if `data` holds fewer than `n * n` elements.
///
/// ```
/// use givens_qr::util::transpose_square;
/// let mut m = vec![1, 2, 3, 4];
/// transpose_square(&mut m, 2);
/// assert_eq!(m, vec![1, 3, 2, 4]);
/// ```
pub fn transpose_square<T>(data: &mut [T], n: usize) {
    assert!(data.len() >= n * n, "buffer too small for {}x{} transpose", n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            data.swap(j * n + i, i * n + j);
        }
    }
}
