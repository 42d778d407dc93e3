use super::lanes::{ByteLanes, DwordLanes};

/// Lane width 1: every "vector" is a single element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scalar;

impl ByteLanes for Scalar {
    const WIDTH: usize = 1;
    const ALIGN: usize = 1;
    const FOLD: usize = 1;

    type Bytes = i8;
    type Words = i16;

    #[inline]
    fn splat(value: i8) -> i8 {
        value
    }

    #[inline]
    fn load(chunk: &[i8]) -> i8 {
        chunk[0]
    }

    #[inline]
    fn sanitize(bytes: i8, sentinel: i8) -> i8 {
        if bytes == sentinel { 0 } else { bytes }
    }

    #[inline]
    fn zero_words() -> i16 {
        0
    }

    #[inline]
    fn widen_add(acc: i16, bytes: i8) -> i16 {
        acc.wrapping_add(bytes as i16)
    }

    #[inline]
    fn reduce_words(acc: i16) -> i32 {
        acc as i32
    }
}

impl DwordLanes for Scalar {
    const WIDTH: usize = 1;
    const ALIGN: usize = 1;

    type Dwords = i32;
    type Qwords = i64;

    #[inline]
    fn load(chunk: &[i32]) -> i32 {
        chunk[0]
    }

    #[inline]
    fn zero_qwords() -> i64 {
        0
    }

    #[inline]
    fn widen_add(acc: i64, dwords: i32) -> i64 {
        acc.wrapping_add(dwords as i64)
    }

    #[inline]
    fn reduce_qwords(acc: i64) -> i64 {
        acc
    }
}
