//! Aligned, batched reductions over a lane engine.
//!
//! Both widths run in three phases:
//!
//! 1. a scalar prologue up to the engine's load boundary (or over the whole
//!    buffer when fewer than one load would remain after it),
//! 2. a vector body of full loads,
//! 3. a scalar epilogue over the elements that do not fill a load.
//!
//! The 8-bit body widens twice. Loads are sign-extended into 16-bit lanes and
//! accumulated for one batch, then the 16-bit accumulator is widened to 32
//! bits, reduced horizontally and added to the 64-bit total. A batch is sized
//! so that a lane of all-`i8::MIN` contributions lands exactly on `i16::MIN`
//! and never wraps. The 32-bit body widens once into 64-bit lanes and reduces
//! a single time at the end.

use super::SanitizeValue;
use crate::align::{lead_in, prologue_len};
use crate::simd::{ByteLanes, DwordLanes, Native};

/// Worst-case i8 contributions one 16-bit lane can absorb.
const WORD_LANE_CAPACITY: usize = (i16::MIN as i32 / i8::MIN as i32) as usize;

/// Loads accumulated into the 16-bit lanes before they are reduced.
#[inline]
pub fn loads_per_batch<E: ByteLanes>() -> usize {
    WORD_LANE_CAPACITY / E::FOLD
}

/// Elements covered by one 8-bit batch.
#[inline]
pub fn batch_len<E: ByteLanes>() -> usize {
    loads_per_batch::<E>() * E::WIDTH
}

/// 8-bit sum over the build's native engine.
#[inline]
pub fn sum8(values: &[i8], sanitize: SanitizeValue) -> i64 {
    sum8_with::<Native>(values, sanitize)
}

/// 32-bit sum over the build's native engine.
#[inline]
pub fn sum32(values: &[i32]) -> i64 {
    sum32_with::<Native>(values)
}

pub fn sum8_with<E: ByteLanes>(values: &[i8], sanitize: SanitizeValue) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let sentinel = sanitize.get();

    let head_len = prologue_len(values.len(), lead_in(values, E::ALIGN), E::WIDTH);
    let (head, rest) = values.split_at(head_len);
    let mut total = fold8(head, sentinel);
    if rest.is_empty() {
        return total;
    }

    let (body, tail) = rest.split_at(rest.len() - rest.len() % E::WIDTH);
    let mask = E::splat(sentinel);
    for batch in body.chunks(batch_len::<E>()) {
        let mut words = E::zero_words();
        for chunk in batch.chunks_exact(E::WIDTH) {
            words = E::widen_add(words, E::sanitize(E::load(chunk), mask));
        }
        total += E::reduce_words(words) as i64;
    }

    total + fold8(tail, sentinel)
}

pub fn sum32_with<E: DwordLanes>(values: &[i32]) -> i64 {
    if values.is_empty() {
        return 0;
    }

    let head_len = prologue_len(values.len(), lead_in(values, E::ALIGN), E::WIDTH);
    let (head, rest) = values.split_at(head_len);
    let mut total = fold32(head);
    if rest.is_empty() {
        return total;
    }

    let mut chunks = rest.chunks_exact(E::WIDTH);
    let mut acc = E::zero_qwords();
    for chunk in &mut chunks {
        acc = E::widen_add(acc, E::load(chunk));
    }
    total += E::reduce_qwords(acc);

    total + fold32(chunks.remainder())
}

#[inline]
fn fold8(values: &[i8], sentinel: i8) -> i64 {
    values
        .iter()
        .filter(|v| **v != sentinel)
        .map(|v| *v as i64)
        .sum()
}

#[inline]
fn fold32(values: &[i32]) -> i64 {
    values.iter().map(|v| *v as i64).sum()
}

#[cfg(test)]
#[path = "../../tests/src_inline/sum/vector.rs"]
mod tests;
