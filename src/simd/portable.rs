use super::lanes::{ByteLanes, DwordLanes};

const BYTE_LANES: usize = 16;
const WORD_LANES: usize = BYTE_LANES / 2;
const DWORD_LANES: usize = 4;
const QWORD_LANES: usize = DWORD_LANES / 2;

/// 128-bit register model on plain arrays, for targets without a native
/// engine. The compiler is free to vectorize the fixed-size loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

impl ByteLanes for Portable {
    const WIDTH: usize = BYTE_LANES;
    const ALIGN: usize = 16;
    const FOLD: usize = BYTE_LANES / WORD_LANES;

    type Bytes = [i8; BYTE_LANES];
    type Words = [i16; WORD_LANES];

    #[inline]
    fn splat(value: i8) -> Self::Bytes {
        [value; BYTE_LANES]
    }

    #[inline]
    fn load(chunk: &[i8]) -> Self::Bytes {
        let mut out = [0i8; BYTE_LANES];
        out.copy_from_slice(&chunk[..BYTE_LANES]);
        out
    }

    #[inline]
    fn sanitize(bytes: Self::Bytes, sentinel: Self::Bytes) -> Self::Bytes {
        let mut out = bytes;
        for (lane, (&b, &s)) in out.iter_mut().zip(bytes.iter().zip(sentinel.iter())) {
            let mask = if b == s { -1i8 } else { 0 };
            *lane = b.wrapping_sub(b & mask);
        }
        out
    }

    #[inline]
    fn zero_words() -> Self::Words {
        [0; WORD_LANES]
    }

    #[inline]
    fn widen_add(acc: Self::Words, bytes: Self::Bytes) -> Self::Words {
        let (lo, hi) = bytes.split_at(WORD_LANES);
        let mut out = acc;
        for (i, lane) in out.iter_mut().enumerate() {
            let pair = (lo[i] as i16).wrapping_add(hi[i] as i16);
            *lane = lane.wrapping_add(pair);
        }
        out
    }

    #[inline]
    fn reduce_words(acc: Self::Words) -> i32 {
        let mut lanes = [0i32; WORD_LANES];
        for (dst, src) in lanes.iter_mut().zip(acc.iter()) {
            *dst = *src as i32;
        }
        let mut active = WORD_LANES;
        while active > 1 {
            active /= 2;
            for i in 0..active {
                lanes[i] = lanes[i].wrapping_add(lanes[i + active]);
            }
        }
        lanes[0]
    }
}

impl DwordLanes for Portable {
    const WIDTH: usize = DWORD_LANES;
    const ALIGN: usize = 16;

    type Dwords = [i32; DWORD_LANES];
    type Qwords = [i64; QWORD_LANES];

    #[inline]
    fn load(chunk: &[i32]) -> Self::Dwords {
        let mut out = [0i32; DWORD_LANES];
        out.copy_from_slice(&chunk[..DWORD_LANES]);
        out
    }

    #[inline]
    fn zero_qwords() -> Self::Qwords {
        [0; QWORD_LANES]
    }

    #[inline]
    fn widen_add(acc: Self::Qwords, dwords: Self::Dwords) -> Self::Qwords {
        let (lo, hi) = dwords.split_at(QWORD_LANES);
        let mut out = acc;
        for (i, lane) in out.iter_mut().enumerate() {
            *lane = lane.wrapping_add(lo[i] as i64 + hi[i] as i64);
        }
        out
    }

    #[inline]
    fn reduce_qwords(acc: Self::Qwords) -> i64 {
        acc.iter().fold(0i64, |sum, lane| sum.wrapping_add(*lane))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/portable.rs"]
mod tests;
