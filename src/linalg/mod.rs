//! Linear algebra routines.

pub mod blas;
