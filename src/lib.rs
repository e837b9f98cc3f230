//! Extended-accumulation dot product for single-precision strided vectors.
//!
//! This crate implements the BLAS level-1 `sdsdot` routine: the dot product
//! of two f32 vector views, accumulated in f64 to reduce rounding error,
//! plus an optional scalar bias added once at the end.
//!
//! The kernel is a single generic function over an [`F32Source`] — an
//! indexable, read-only view of f32 values. Native slices implement the
//! trait directly; [`Float32Arena`] adapts a flat byte buffer (e.g. a
//! managed linear memory pre-populated by some other component) into the
//! same capability, so both go through one traversal loop.
//!
//! Two calling conventions are exposed, mirroring the two shapes BLAS
//! callers use:
//!
//! - [`sdsdot`]: strides only, with each starting offset derived from the
//!   stride sign (0 for non-negative strides, `(n-1)*|stride|` for
//!   negative ones).
//! - [`sdsdot_indexed`]: strides plus explicit starting offsets, for
//!   composing sub-vector views over a shared buffer without copying.
//!
//! Accumulation is strictly sequential and left-to-right, so results are
//! bit-for-bit reproducible for fixed inputs.
//!
//! # Example
//!
//! ```
//! use extdot::sdsdot;
//!
//! let x = vec![4.0f32, 2.0, -3.0, 5.0, -1.0];
//! let y = vec![2.0f32, 6.0, -1.0, -4.0, 8.0];
//!
//! assert_eq!(sdsdot(5, 0.0, &x[..], 1, &y[..], 1), -5.0);
//! ```

pub mod arena;
pub mod error;
pub mod linalg;
pub mod source;

pub use arena::{ArenaView, Float32Arena};
pub use error::{ExtdotError, Result};
pub use linalg::blas::sdsdot::{sdsdot, sdsdot_indexed};
pub use source::F32Source;
