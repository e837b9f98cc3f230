//! Single-precision dot product with double-precision accumulation.

use crate::source::F32Source;

/// Computes the dot product of two single-precision vectors with extended
/// (double-precision) accumulation, plus a scalar bias.
///
/// This function mirrors the functionality of the BLAS `sdsdot` routine.
/// It calculates `sb + sum(sx[i] * sy[i])` for `n` elements, considering
/// strides. Each f32 product is computed and summed in f64, which keeps
/// the cumulative rounding error far below what f32 accumulation would
/// give; the bias is added once, after the loop, so it never interferes
/// with the rounding of the running sum.
///
/// The starting offset of each vector is derived from its stride sign:
/// a non-negative stride starts at index 0, a negative stride starts at
/// index `(n-1)*|stride|` and walks backward, so logical element 0 is the
/// same regardless of physical walk direction. Callers that manage
/// offsets themselves should use [`sdsdot_indexed`], to which this
/// function delegates.
///
/// # Arguments
///
/// * `n`: The number of elements to process in `sx` and `sy`. A zero or
///   negative `n` performs no reads and returns `sb` promoted to f64.
/// * `sb`: The scalar bias added to the accumulated sum.
/// * `sx`: The first input vector; any [`F32Source`] (a `[f32]` slice, an
///   [`ArenaView`](crate::arena::ArenaView), ...).
/// * `incx`: The increment (stride) for accessing elements in `sx`.
///   A positive value means forward iteration, negative means backward.
///   Zero is permitted and rereads the starting element every step.
/// * `sy`: The second input vector.
/// * `incy`: The increment (stride) for accessing elements in `sy`.
///
/// # Returns
///
/// The biased dot product as f64, accumulated strictly left to right.
/// For fixed inputs the result is bit-for-bit reproducible: there is no
/// reassociation and no parallel reduction.
///
/// # Panics
///
/// This function will panic if the index span touched by the traversal
/// (`(n-1)*|inc| + 1` elements) exceeds the length of either source.
/// Staying in bounds is the caller's contract; the check happens once,
/// up front, never inside the loop.
///
/// # Examples
///
/// ```
/// use extdot::sdsdot;
///
/// let sx = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let sy = vec![1.0f32, 1.0, 1.0, 1.0, 1.0, 1.0];
///
/// // sx walked forward by 2 (1, 3, 5), sy walked backward from sy[2].
/// assert_eq!(sdsdot(3, 0.0, &sx[..], 2, &sy[..], -1), 9.0);
/// ```
pub fn sdsdot<X, Y>(n: isize, sb: f32, sx: &X, incx: isize, sy: &Y, incy: isize) -> f64
where
    X: F32Source + ?Sized,
    Y: F32Source + ?Sized,
{
    if n <= 0 {
        return sb as f64;
    }

    sdsdot_indexed(
        n,
        sb,
        sx,
        incx,
        implicit_offset(n, incx),
        sy,
        incy,
        implicit_offset(n, incy),
    )
}

/// Computes the extended-accumulation dot product with explicit starting
/// offsets.
///
/// Same contract as [`sdsdot`], except the first logically-indexed element
/// of each vector is `source[offset]` rather than being derived from the
/// stride sign. Explicit offsets make it possible to compose sub-vector
/// views over one shared buffer without copying: the same source can back
/// many vectors anchored at different offsets.
///
/// The element read at step `k` is `source[offset + k*inc]` for `k` in
/// `0..n`; with a negative stride the indices walk down from `offset`
/// toward the front of the buffer.
///
/// # Arguments
///
/// * `n`: The number of elements to process. Zero or negative returns `sb`.
/// * `sb`: The scalar bias added once after the reduction loop.
/// * `sx`, `incx`, `offset_x`: First vector, its stride, and the index of
///   its first logical element.
/// * `sy`, `incy`, `offset_y`: Second vector, its stride, and the index of
///   its first logical element.
///
/// # Panics
///
/// This function will panic if any index in
/// `[offset + min(0, (n-1)*inc), offset + max(0, (n-1)*inc)]` falls
/// outside either source: a negative-going stride must not walk below
/// index 0, and the far end of the span must stay below `len()`.
///
/// # Examples
///
/// ```
/// use extdot::sdsdot_indexed;
///
/// let sx = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let sy = vec![6.0f32, 7.0, 8.0, 9.0, 10.0, 11.0];
///
/// // 1*9 + 3*10 + 5*11
/// assert_eq!(sdsdot_indexed(3, 0.0, &sx[..], 2, 0, &sy[..], 1, 3), 94.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn sdsdot_indexed<X, Y>(
    n: isize,
    sb: f32,
    sx: &X,
    incx: isize,
    offset_x: usize,
    sy: &Y,
    incy: isize,
    offset_y: usize,
) -> f64
where
    X: F32Source + ?Sized,
    Y: F32Source + ?Sized,
{
    if n <= 0 {
        return sb as f64;
    }

    validate_span("sx", sx.len(), n, incx, offset_x);
    validate_span("sy", sy.len(), n, incy, offset_y);

    let mut sum: f64 = 0.0;
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;

    for _ in 0..n {
        // Span validated above; ix and iy stay within 0..len for the
        // whole walk, so the casts are safe.
        sum += sx.get(ix as usize) as f64 * sy.get(iy as usize) as f64;
        ix += incx;
        iy += incy;
    }

    sum + sb as f64
}

/// Starting index convention for the stride-only calling shape: index 0
/// for a forward (or zero) stride, the physically last touched element
/// for a backward stride.
fn implicit_offset(n: isize, inc: isize) -> usize {
    if inc >= 0 {
        0
    } else {
        ((1 - n) * inc) as usize
    }
}

/// Validates that every index `offset + k*inc` for `k` in `0..n` lands
/// inside `0..len`. Panics with the offending parameters otherwise.
fn validate_span(name: &str, len: usize, n: isize, inc: isize, offset: usize) {
    let last = offset as isize + (n - 1) * inc;

    let (low, high) = if inc >= 0 {
        (offset as isize, last)
    } else {
        (last, offset as isize)
    };

    if low < 0 {
        panic!(
            "sdsdot: {} offset {} with stride {} walks below index 0 for n={}.",
            name, offset, inc, n
        );
    }
    if high >= len as isize {
        panic!(
            "sdsdot: {} length {} is insufficient for n={}, stride {} and offset {}. Required: {}",
            name,
            len,
            n,
            inc,
            offset,
            high + 1
        );
    }
}
