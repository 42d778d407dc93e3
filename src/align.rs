/// Bytes from `addr` up to the next multiple of `align`.
///
/// `align` must be a power of two. An address already on the boundary needs
/// no padding, so the result is always in `0..align`.
#[inline]
pub fn align_padding(addr: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two(), "alignment must be a power of two");
    addr.wrapping_neg() & (align - 1)
}

/// Elements of `T` to skip before `values` reaches an `align`-byte boundary.
///
/// Saturates at `values.len()`, so the result is always a valid split point.
#[inline]
pub fn lead_in<T>(values: &[T], align: usize) -> usize {
    let size = std::mem::size_of::<T>();
    if size == 0 || align <= size {
        return 0;
    }
    let bytes = align_padding(values.as_ptr() as usize, align);
    (bytes / size).min(values.len())
}

/// Prologue length for a vector body that consumes `width` elements per load.
///
/// When the aligned remainder cannot hold a single load the whole buffer is
/// prologue.
#[inline]
pub fn prologue_len(len: usize, lead_in: usize, width: usize) -> usize {
    if len < lead_in.saturating_add(width) {
        len
    } else {
        lead_in
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/align.rs"]
mod tests;
