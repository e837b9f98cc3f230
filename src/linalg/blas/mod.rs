//! BLAS level-1 routines, one routine per file.

pub mod sdsdot;
