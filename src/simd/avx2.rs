#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::lanes::{ByteLanes, DwordLanes};

/// 256-bit AVX2 engine. Compiled only when the target enables AVX2, so every
/// intrinsic below is available on the running CPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct Avx2;

impl ByteLanes for Avx2 {
    const WIDTH: usize = 32;
    const ALIGN: usize = 32;
    const FOLD: usize = 2;

    type Bytes = __m256i;
    type Words = __m256i;

    #[inline(always)]
    fn splat(value: i8) -> __m256i {
        unsafe { _mm256_set1_epi8(value) }
    }

    #[inline(always)]
    fn load(chunk: &[i8]) -> __m256i {
        let chunk = &chunk[..<Self as ByteLanes>::WIDTH];
        // SAFETY: `chunk` holds exactly 32 readable bytes; loadu has no alignment requirement.
        unsafe { _mm256_loadu_si256(chunk.as_ptr() as *const __m256i) }
    }

    #[inline(always)]
    fn sanitize(bytes: __m256i, sentinel: __m256i) -> __m256i {
        unsafe {
            let mask = _mm256_cmpeq_epi8(bytes, sentinel);
            _mm256_sub_epi8(bytes, _mm256_and_si256(bytes, mask))
        }
    }

    #[inline(always)]
    fn zero_words() -> __m256i {
        unsafe { _mm256_setzero_si256() }
    }

    #[inline(always)]
    fn widen_add(acc: __m256i, bytes: __m256i) -> __m256i {
        unsafe {
            let lo = _mm256_cvtepi8_epi16(_mm256_castsi256_si128(bytes));
            let hi = _mm256_cvtepi8_epi16(_mm256_extracti128_si256(bytes, 1));
            _mm256_add_epi16(acc, _mm256_add_epi16(lo, hi))
        }
    }

    #[inline(always)]
    fn reduce_words(acc: __m256i) -> i32 {
        unsafe {
            let lo = _mm256_cvtepi16_epi32(_mm256_castsi256_si128(acc));
            let hi = _mm256_cvtepi16_epi32(_mm256_extracti128_si256(acc, 1));
            let dwords = _mm256_hadd_epi32(lo, hi);
            let mut v = _mm_add_epi32(
                _mm256_castsi256_si128(dwords),
                _mm256_extracti128_si256(dwords, 1),
            );
            v = _mm_add_epi32(v, _mm_srli_si128(v, 8));
            v = _mm_add_epi32(v, _mm_srli_si128(v, 4));
            _mm_cvtsi128_si32(v)
        }
    }
}

impl DwordLanes for Avx2 {
    const WIDTH: usize = 8;
    const ALIGN: usize = 32;

    type Dwords = __m256i;
    type Qwords = __m256i;

    #[inline(always)]
    fn load(chunk: &[i32]) -> __m256i {
        let chunk = &chunk[..<Self as DwordLanes>::WIDTH];
        // SAFETY: `chunk` holds exactly 8 readable i32; loadu has no alignment requirement.
        unsafe { _mm256_loadu_si256(chunk.as_ptr() as *const __m256i) }
    }

    #[inline(always)]
    fn zero_qwords() -> __m256i {
        unsafe { _mm256_setzero_si256() }
    }

    #[inline(always)]
    fn widen_add(acc: __m256i, dwords: __m256i) -> __m256i {
        unsafe {
            let lo = _mm256_cvtepi32_epi64(_mm256_castsi256_si128(dwords));
            let hi = _mm256_cvtepi32_epi64(_mm256_extracti128_si256(dwords, 1));
            _mm256_add_epi64(acc, _mm256_add_epi64(lo, hi))
        }
    }

    #[inline(always)]
    fn reduce_qwords(acc: __m256i) -> i64 {
        unsafe {
            let mut v = _mm_add_epi64(
                _mm256_castsi256_si128(acc),
                _mm256_extracti128_si256(acc, 1),
            );
            v = _mm_add_epi64(v, _mm_srli_si128(v, 8));
            _mm_cvtsi128_si64(v)
        }
    }
}
