#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::lanes::{ByteLanes, DwordLanes};

/// 128-bit NEON engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neon;

impl ByteLanes for Neon {
    const WIDTH: usize = 16;
    const ALIGN: usize = 16;
    const FOLD: usize = 2;

    type Bytes = int8x16_t;
    type Words = int16x8_t;

    #[inline(always)]
    fn splat(value: i8) -> int8x16_t {
        unsafe { vdupq_n_s8(value) }
    }

    #[inline(always)]
    fn load(chunk: &[i8]) -> int8x16_t {
        let chunk = &chunk[..<Self as ByteLanes>::WIDTH];
        // SAFETY: `chunk` holds exactly 16 readable i8.
        unsafe { vld1q_s8(chunk.as_ptr()) }
    }

    #[inline(always)]
    fn sanitize(bytes: int8x16_t, sentinel: int8x16_t) -> int8x16_t {
        unsafe {
            let mask = vreinterpretq_s8_u8(vceqq_s8(bytes, sentinel));
            vsubq_s8(bytes, vandq_s8(bytes, mask))
        }
    }

    #[inline(always)]
    fn zero_words() -> int16x8_t {
        unsafe { vdupq_n_s16(0) }
    }

    #[inline(always)]
    fn widen_add(acc: int16x8_t, bytes: int8x16_t) -> int16x8_t {
        unsafe {
            let lo = vmovl_s8(vget_low_s8(bytes));
            let hi = vmovl_s8(vget_high_s8(bytes));
            vaddq_s16(acc, vaddq_s16(lo, hi))
        }
    }

    #[inline(always)]
    fn reduce_words(acc: int16x8_t) -> i32 {
        unsafe {
            let lo = vmovl_s16(vget_low_s16(acc));
            let hi = vmovl_s16(vget_high_s16(acc));
            vaddvq_s32(vaddq_s32(lo, hi))
        }
    }
}

impl DwordLanes for Neon {
    const WIDTH: usize = 4;
    const ALIGN: usize = 16;

    type Dwords = int32x4_t;
    type Qwords = int64x2_t;

    #[inline(always)]
    fn load(chunk: &[i32]) -> int32x4_t {
        let chunk = &chunk[..<Self as DwordLanes>::WIDTH];
        // SAFETY: `chunk` holds exactly 4 readable i32.
        unsafe { vld1q_s32(chunk.as_ptr()) }
    }

    #[inline(always)]
    fn zero_qwords() -> int64x2_t {
        unsafe { vdupq_n_s64(0) }
    }

    #[inline(always)]
    fn widen_add(acc: int64x2_t, dwords: int32x4_t) -> int64x2_t {
        unsafe {
            let lo = vmovl_s32(vget_low_s32(dwords));
            let hi = vmovl_s32(vget_high_s32(dwords));
            vaddq_s64(acc, vaddq_s64(lo, hi))
        }
    }

    #[inline(always)]
    fn reduce_qwords(acc: int64x2_t) -> i64 {
        unsafe { vaddvq_s64(acc) }
    }
}
