//! Error types for extdot operations.
//!
//! These errors are returned by the fallible arena layer (construction,
//! writes, view resolution). The dot-product kernel itself never returns
//! an error: it is a pure function, and contract violations on slice
//! bounds are rejected with a panic at the entry points.

use std::fmt;

/// Errors that can occur when working with a [`crate::Float32Arena`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtdotError {
    /// A byte offset or length reaches past the end of the arena.
    OutOfBounds {
        /// The byte offset that was requested.
        byte_offset: usize,
        /// The number of bytes the request would touch.
        requested_bytes: usize,
        /// The arena size in bytes.
        arena_bytes: usize,
    },
    /// A byte offset or buffer length is not a whole number of element cells.
    MisalignedOffset {
        /// The offending byte count.
        byte_offset: usize,
        /// The element width the arena is declared with.
        element_width: usize,
    },
}

impl fmt::Display for ExtdotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtdotError::OutOfBounds {
                byte_offset,
                requested_bytes,
                arena_bytes,
            } => write!(
                f,
                "Arena access out of bounds: {} bytes at byte offset {} exceed arena size {}",
                requested_bytes, byte_offset, arena_bytes
            ),
            ExtdotError::MisalignedOffset {
                byte_offset,
                element_width,
            } => write!(
                f,
                "Misaligned arena offset: {} is not a multiple of the element width {}",
                byte_offset, element_width
            ),
        }
    }
}

impl std::error::Error for ExtdotError {}

/// Result type alias for extdot operations.
pub type Result<T> = std::result::Result<T, ExtdotError>;

/// Creates an out-of-bounds error.
pub fn out_of_bounds(byte_offset: usize, requested_bytes: usize, arena_bytes: usize) -> ExtdotError {
    ExtdotError::OutOfBounds {
        byte_offset,
        requested_bytes,
        arena_bytes,
    }
}

/// Creates a misaligned-offset error.
pub fn misaligned_offset(byte_offset: usize, element_width: usize) -> ExtdotError {
    ExtdotError::MisalignedOffset {
        byte_offset,
        element_width,
    }
}
