use core::ops::Range;

/// Returns a pair of storage ranges covering `len` slots that end right before position `end`.
///
/// Positions are in range `1..=capacity`, `capacity` standing for the boundary that `0` would also name.
/// `len` must not exceed `capacity`.
///
/// Ranges are returned in logical (left to right) order: the first one lies at the high end of storage
/// and is non-empty only if the run wraps through index `0`.
pub fn ranges(capacity: usize, end: usize, len: usize) -> (Range<usize>, Range<usize>) {
    let low = usize::min(end, len);
    let high = len - low;
    (capacity - high..capacity, end - low..end)
}

/// Position reached by moving `len` slots to the left of `pos`.
///
/// Result stays in range `1..=capacity`.
#[inline]
pub fn retreat(capacity: usize, pos: usize, len: usize) -> usize {
    if len < pos {
        pos - len
    } else {
        pos + capacity - len
    }
}
