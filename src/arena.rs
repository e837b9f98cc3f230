//! Managed linear-memory arena for f32 data.
//!
//! Some callers do not hand the kernel a native slice: they own one flat
//! byte buffer (for example the linear memory of a foreign computation
//! engine), pre-populate regions of it with a write primitive, and then
//! refer to vectors by integer byte-offset "pointers" into that buffer.
//!
//! [`Float32Arena`] is that buffer as an explicit resource object. It owns
//! a byte buffer of native-endian f32 cells, validates every byte offset
//! against the declared element width, and resolves (pointer, length)
//! pairs to [`ArenaView`] windows. A view implements
//! [`F32Source`](crate::source::F32Source), so arena-backed vectors flow
//! through the exact same kernel as slices:
//!
//! ```
//! use extdot::{sdsdot, Float32Arena};
//!
//! let mut arena = Float32Arena::with_capacity(8);
//! arena.write(0, &[1.0, 2.0, 3.0, 4.0]).unwrap();
//! arena.write(16, &[1.0, 1.0, 1.0, 1.0]).unwrap();
//!
//! let x = arena.view(0, 4).unwrap();
//! let y = arena.view(16, 4).unwrap();
//! assert_eq!(sdsdot(4, 0.0, &x, 1, &y, 1), 10.0);
//! ```

use crate::error::{misaligned_offset, out_of_bounds, Result};
use crate::source::F32Source;

/// Width in bytes of one arena cell (one f32).
pub const ELEMENT_WIDTH: usize = std::mem::size_of::<f32>();

/// A flat byte buffer of f32 cells addressed by byte offset.
///
/// The arena never hands out mutable views; mutation goes through
/// [`write`](Float32Arena::write) so that bounds and alignment are checked
/// once, at the boundary. Reads go through [`view`](Float32Arena::view),
/// which borrows the arena immutably — many views over the same arena can
/// coexist, including overlapping ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Float32Arena {
    bytes: Vec<u8>,
}

impl Float32Arena {
    /// Creates a zero-filled arena holding `n_elements` f32 cells.
    pub fn with_capacity(n_elements: usize) -> Self {
        Float32Arena {
            bytes: vec![0u8; n_elements * ELEMENT_WIDTH],
        }
    }

    /// Wraps an existing byte buffer as an arena.
    ///
    /// # Errors
    ///
    /// Returns [`ExtdotError::MisalignedOffset`](crate::ExtdotError) if the
    /// buffer length is not a whole number of f32 cells.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() % ELEMENT_WIDTH != 0 {
            return Err(misaligned_offset(bytes.len(), ELEMENT_WIDTH));
        }
        Ok(Float32Arena { bytes })
    }

    /// Number of f32 cells in the arena.
    pub fn len(&self) -> usize {
        self.bytes.len() / ELEMENT_WIDTH
    }

    /// Returns `true` if the arena holds no cells.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Arena size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Raw view of the backing bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copies `values` into the arena starting at `byte_offset`.
    ///
    /// This is the pre-population primitive: callers fill regions of the
    /// arena with it and later refer to those regions by byte offset.
    ///
    /// # Errors
    ///
    /// * [`ExtdotError::MisalignedOffset`](crate::ExtdotError) if
    ///   `byte_offset` is not a multiple of the element width.
    /// * [`ExtdotError::OutOfBounds`](crate::ExtdotError) if the copy would
    ///   run past the end of the arena.
    pub fn write(&mut self, byte_offset: usize, values: &[f32]) -> Result<()> {
        let requested = self.check_range(byte_offset, values.len())?;
        self.bytes[byte_offset..byte_offset + requested].copy_from_slice(bytemuck::cast_slice(values));
        Ok(())
    }

    /// Resolves a byte-offset "pointer" and element count to a read-only
    /// window implementing [`F32Source`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`write`](Float32Arena::write): the offset must
    /// be cell-aligned and `len` elements must fit.
    pub fn view(&self, byte_offset: usize, len: usize) -> Result<ArenaView<'_>> {
        let requested = self.check_range(byte_offset, len)?;
        Ok(ArenaView {
            bytes: &self.bytes[byte_offset..byte_offset + requested],
        })
    }

    /// Validates alignment and bounds for `len` elements at `byte_offset`;
    /// returns the byte size of the region.
    fn check_range(&self, byte_offset: usize, len: usize) -> Result<usize> {
        if byte_offset % ELEMENT_WIDTH != 0 {
            return Err(misaligned_offset(byte_offset, ELEMENT_WIDTH));
        }
        let requested = len * ELEMENT_WIDTH;
        if byte_offset + requested > self.bytes.len() {
            return Err(out_of_bounds(byte_offset, requested, self.bytes.len()));
        }
        Ok(requested)
    }
}

/// A read-only window of f32 cells borrowed from a [`Float32Arena`].
#[derive(Debug, Clone, Copy)]
pub struct ArenaView<'a> {
    bytes: &'a [u8],
}

impl F32Source for ArenaView<'_> {
    #[inline(always)]
    fn get(&self, index: usize) -> f32 {
        let start = index * ELEMENT_WIDTH;
        // The window is borrowed from a Vec<u8>, so cells may not be
        // 4-byte aligned; an unaligned read is always valid for POD.
        bytemuck::pod_read_unaligned(&self.bytes[start..start + ELEMENT_WIDTH])
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.bytes.len() / ELEMENT_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtdotError;

    #[test]
    fn test_with_capacity_zero_filled() {
        let arena = Float32Arena::with_capacity(3);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.size_bytes(), 12);

        let view = arena.view(0, 3).unwrap();
        for i in 0..3 {
            assert_eq!(view.get(i), 0.0);
        }
    }

    #[test]
    fn test_write_then_view_round_trip() {
        let mut arena = Float32Arena::with_capacity(4);
        arena.write(4, &[1.5, -2.25]).unwrap();

        let view = arena.view(4, 2).unwrap();
        assert_eq!(view.get(0), 1.5);
        assert_eq!(view.get(1), -2.25);

        // Cells outside the written region stay zero.
        let whole = arena.view(0, 4).unwrap();
        assert_eq!(whole.get(0), 0.0);
        assert_eq!(whole.get(3), 0.0);
    }

    #[test]
    fn test_overlapping_views() {
        let mut arena = Float32Arena::with_capacity(4);
        arena.write(0, &[1.0, 2.0, 3.0, 4.0]).unwrap();

        let a = arena.view(0, 3).unwrap();
        let b = arena.view(8, 2).unwrap();
        assert_eq!(a.get(2), 3.0);
        assert_eq!(b.get(0), 3.0);
    }

    #[test]
    fn test_from_bytes_rejects_ragged_length() {
        let err = Float32Arena::from_bytes(vec![0u8; 6]).unwrap_err();
        assert_eq!(
            err,
            ExtdotError::MisalignedOffset {
                byte_offset: 6,
                element_width: ELEMENT_WIDTH,
            }
        );
    }

    #[test]
    fn test_from_bytes_preserves_cells() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2.5f32.to_ne_bytes());
        bytes.extend_from_slice(&(-4.0f32).to_ne_bytes());

        let arena = Float32Arena::from_bytes(bytes).unwrap();
        let view = arena.view(0, 2).unwrap();
        assert_eq!(view.get(0), 2.5);
        assert_eq!(view.get(1), -4.0);
    }

    #[test]
    fn test_write_misaligned_offset() {
        let mut arena = Float32Arena::with_capacity(4);
        let err = arena.write(2, &[1.0]).unwrap_err();
        assert!(matches!(err, ExtdotError::MisalignedOffset { byte_offset: 2, .. }));
    }

    #[test]
    fn test_write_out_of_bounds() {
        let mut arena = Float32Arena::with_capacity(2);
        let err = arena.write(4, &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            ExtdotError::OutOfBounds {
                byte_offset: 4,
                requested_bytes: 8,
                arena_bytes: 8,
            }
        );
    }

    #[test]
    fn test_view_out_of_bounds() {
        let arena = Float32Arena::with_capacity(2);
        assert!(arena.view(0, 3).is_err());
        assert!(arena.view(8, 1).is_err());
        // A zero-length view at the end boundary is fine.
        assert!(arena.view(8, 0).is_ok());
    }

    #[test]
    fn test_empty_arena() {
        let arena = Float32Arena::with_capacity(0);
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
        assert!(arena.view(0, 0).is_ok());
    }
}
