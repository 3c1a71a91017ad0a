use alloc::vec::Vec;

use log::trace;

use crate::linalg::rotation::{givens, rotate};
use crate::traits::FloatScalar;
use crate::util::{identity, transpose_square};

/// Memory layout of the working buffers during an elimination sweep.
///
/// The sweep itself only ever asks for the flat offset of `(row, col)`; the
/// remaining methods convert between the public column-major representation
/// and the working one.
pub trait Layout {
    /// Flat offset of element `(row, col)` in an `nrows x ncols` buffer.
    fn offset(row: usize, col: usize, nrows: usize, ncols: usize) -> usize;

    /// Copy the column-major `n x p` input into a working R buffer.
    fn load<T: Copy>(x: &[T], n: usize, p: usize) -> Vec<T>;

    /// Turn the accumulated `n x n` Qᵗ into the column-major thin Q (`n x p`).
    fn finish_q<T: Copy>(qt: &mut Vec<T>, n: usize, p: usize);

    /// Compact the working `n x p` R into its column-major `p x p` block.
    fn finish_r<T: Copy>(r: &mut Vec<T>, n: usize, p: usize);
}

/// Column-major working layout: R keeps the orientation of the input, so
/// consecutive elements of a row are `n` apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColMajor;

/// Row-major working layout: the input is transposed once so that every
/// row update walks contiguous memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajor;

impl Layout for ColMajor {
    #[inline(always)]
    fn offset(row: usize, col: usize, nrows: usize, _ncols: usize) -> usize {
        col * nrows + row
    }

    fn load<T: Copy>(x: &[T], _n: usize, _p: usize) -> Vec<T> {
        x.to_vec()
    }

    fn finish_q<T: Copy>(qt: &mut Vec<T>, n: usize, p: usize) {
        // Column-major Qᵗ is row-major Q.
        transpose_square(qt, n);
        qt.truncate(n * p);
    }

    fn finish_r<T: Copy>(r: &mut Vec<T>, n: usize, p: usize) {
        // Destination index never exceeds the source index, so this is safe in place.
        for j in 0..p {
            for i in 0..p {
                r[j * p + i] = r[j * n + i];
            }
        }
        r.truncate(p * p);
    }
}

impl Layout for RowMajor {
    #[inline(always)]
    fn offset(row: usize, col: usize, _nrows: usize, ncols: usize) -> usize {
        row * ncols + col
    }

    fn load<T: Copy>(x: &[T], n: usize, p: usize) -> Vec<T> {
        let mut r = Vec::with_capacity(n * p);
        for i in 0..n {
            for j in 0..p {
                r.push(x[j * n + i]);
            }
        }
        r
    }

    fn finish_q<T: Copy>(qt: &mut Vec<T>, n: usize, p: usize) {
        // Row-major Qᵗ is already column-major Q.
        qt.truncate(n * p);
    }

    fn finish_r<T: Copy>(r: &mut Vec<T>, _n: usize, p: usize) {
        // The top p rows are the leading p*p elements.
        r.truncate(p * p);
        transpose_square(r, p);
    }
}

/// Rotate rows `upper` and `lower` of an `nrows x ncols` matrix.
#[inline]
fn rotate_rows<T: FloatScalar, L: Layout>(
    m: &mut [T],
    nrows: usize,
    ncols: usize,
    upper: usize,
    lower: usize,
    c: T,
    s: T,
) {
    for k in 0..ncols {
        let iu = L::offset(upper, k, nrows, ncols);
        let il = L::offset(lower, k, nrows, ncols);
        let (x, y) = rotate(c, s, m[iu], m[il]);
        m[iu] = x;
        m[il] = y;
    }
}

/// Givens elimination sweep in place.
///
/// `r` is the `n x p` working matrix and `qt` the `n x n` accumulator, both
/// stored in layout `L`. Column by column, rows are eliminated bottom-up:
/// each rotation combines rows `i - 1` and `i`, so it never touches a zero
/// produced earlier in the sweep. Every rotation applied to `r` is applied to
/// `qt` as well; if `qt` starts as the identity it ends as Qᵗ with
/// `Q * R == X`.
///
/// Entries already at or below `T::min_positive_value()` in magnitude are
/// skipped and left as they are. Every eliminated entry is stored as exactly
/// zero. Returns the number of rotations applied.
///
/// Small entries elsewhere in `r` are kept until [`zero_small`] is run.
///
/// ```
/// use givens_qr::linalg::{sweep, ColMajor};
/// use givens_qr::util::identity;
///
/// // column-major 2x1 input (3, 4)
/// let mut r = vec![3.0_f64, 4.0];
/// let mut qt = identity(2);
/// let applied = sweep::<f64, ColMajor>(&mut qt, &mut r, 2, 1);
/// assert_eq!(applied, 1);
/// assert!((r[0] - 5.0).abs() < 1e-15);
/// assert_eq!(r[1], 0.0);
/// ```
pub fn sweep<T: FloatScalar, L: Layout>(qt: &mut [T], r: &mut [T], n: usize, p: usize) -> usize {
    assert_eq!(qt.len(), n * n, "qt length must equal n * n");
    assert_eq!(r.len(), n * p, "r length must equal n * p");

    let tiny = T::min_positive_value();
    let mut applied = 0usize;
    let mut skipped = 0usize;

    for j in 0..p {
        for i in ((j + 1)..n).rev() {
            let b = r[L::offset(i, j, n, p)];
            if b.abs() <= tiny {
                skipped += 1;
                continue;
            }
            let a = r[L::offset(i - 1, j, n, p)];
            let (c, s) = givens(a, b);
            rotate_rows::<T, L>(r, n, p, i - 1, i, c, s);
            rotate_rows::<T, L>(qt, n, n, i - 1, i, c, s);
            // Exact zero; the rotated value is only rounding noise of order eps * |a|.
            r[L::offset(i, j, n, p)] = T::zero();
            applied += 1;
        }
    }

    trace!("givens sweep {}x{}: {} applied, {} already zero", n, p, applied, skipped);
    applied
}

/// Force every entry with magnitude below `tol` to exactly zero.
///
/// ```
/// use givens_qr::linalg::zero_small;
/// let mut r = vec![1.0_f64, 1e-17, -3e-9, 2.0];
/// zero_small(&mut r, 1e-8);
/// assert_eq!(r, vec![1.0, 0.0, 0.0, 2.0]);
/// ```
pub fn zero_small<T: FloatScalar>(r: &mut [T], tol: T) {
    for v in r.iter_mut() {
        if v.abs() < tol {
            *v = T::zero();
        }
    }
}

/// Run a full sweep on a fresh copy of the column-major input.
///
/// Returns `(qt, r, applied)` with both buffers still in layout `L`, without
/// cleanup or compaction.
pub(crate) fn sweep_copy<T: FloatScalar, L: Layout>(
    x: &[T],
    n: usize,
    p: usize,
) -> (Vec<T>, Vec<T>, usize) {
    let mut qt = identity(n);
    let mut r = L::load(x, n, p);
    let applied = sweep::<T, L>(&mut qt, &mut r, n, p);
    (qt, r, applied)
}
