//! # givens-qr
//!
//! QR decomposition of dense tall matrices (`n >= p`) by a sweep of Givens
//! plane rotations. Pure Rust, no-std compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use givens_qr::linalg::{qr_decomposition, QrSettings, Variant};
//!
//! // column-major 3x2: columns (1, 1, 1) and (0, 1, 2)
//! let x = [1.0_f64, 1.0, 1.0, 0.0, 1.0, 2.0];
//! let settings = QrSettings::default().with_variant(Variant::Transposed);
//! let qr = qr_decomposition(&x, 3, 2, &settings).unwrap();
//!
//! assert_eq!(qr.q().len(), 3 * 2);
//! assert_eq!(qr.r().len(), 2 * 2);
//! assert_eq!(qr.r()[1], 0.0); // strictly upper triangular
//! ```
//!
//! ## Modules
//!
//! - [`linalg`] — the decomposition. [`linalg::givens`] computes one rotation,
//!   [`linalg::sweep()`] eliminates a whole matrix in place for a given
//!   [`linalg::Layout`], and [`linalg::qr_decomposition`] ties it together:
//!   validation, working-buffer setup, sweep, cleanup, and extraction of the
//!   thin Q (`n x p`) and square R (`p x p`).
//!
//! - [`dynmatrix`] — Heap-allocated column-major `DynMatrix<T>` with a
//!   [`GivensQr`] wrapper offering `q()`, `r()`, least-squares `solve()` and
//!   `det()`.
//!
//! - [`util`] — flat-buffer identity and in-place square transpose.
//!
//! - [`traits`] — [`Scalar`] for matrix elements and [`FloatScalar`] for the
//!   real floats the decomposition runs on (`f32`, `f64`).
//!
//! ## Layout variants
//!
//! All public buffers are column-major. [`linalg::Variant::Baseline`] sweeps
//! over the input in that orientation; [`linalg::Variant::Transposed`]
//! transposes it once up front so each rotation walks contiguous rows. Both
//! produce the same factors.
//!
//! ## Logging
//!
//! Emits through the [`log`] facade: one `debug` record per decomposition and
//! a `trace` record per sweep. Nothing is printed unless the application
//! installs a logger.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm; without it `num-traits` falls back to `libm` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dynmatrix;
pub mod linalg;
pub mod traits;
pub mod util;

pub use dynmatrix::{DynMatrix, GivensQr};
pub use linalg::{qr_decomposition, Qr, QrError, QrSettings, Variant};
pub use traits::{FloatScalar, Scalar};
