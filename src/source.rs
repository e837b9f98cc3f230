//! Read-only indexable views over f32 data.
//!
//! The dot-product kernel does not care where its elements live: a native
//! slice and a window into a managed byte arena are both just "something
//! that yields an `f32` for a logical index". [`F32Source`] is that seam.
//! The kernel is generic over it, so one traversal loop serves every
//! backing store and the backends never need to know about each other.

/// An indexable, read-only source of f32 values.
///
/// Implementors expose a flat sequence of 32-bit floats addressable by
/// index. The kernel only ever reads through [`get`](F32Source::get) and
/// never retains the borrow beyond a single call.
///
/// # Contract
///
/// `get` with an index in `0..len()` must return the element at that
/// position. Out-of-range indices may panic; callers (or the validating
/// entry points in [`crate::linalg::blas::sdsdot`]) are responsible for
/// staying in range.
pub trait F32Source {
    /// Returns the element at `index`.
    fn get(&self, index: usize) -> f32;

    /// Number of addressable elements.
    fn len(&self) -> usize;

    /// Returns `true` if the source holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identity adapter: a slice is its own f32 source.
impl F32Source for [f32] {
    #[inline(always)]
    fn get(&self, index: usize) -> f32 {
        self[index]
    }

    #[inline(always)]
    fn len(&self) -> usize {
        <[f32]>::len(self)
    }
}
