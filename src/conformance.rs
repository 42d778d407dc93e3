//! Scalar-versus-vector agreement sweeps.
//!
//! Buffers are staged into fresh allocations at chosen distances from the
//! engine's load boundary so every prologue length is reached, and lengths are
//! placed around batch multiples so the widening cadence is crossed.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

use crate::align::{align_padding, lead_in};
use crate::simd::{ByteLanes, DwordLanes};
use crate::sum::SanitizeValue;
use crate::sum::scalar;
use crate::sum::vector::{batch_len, sum8_with, sum32_with};

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Longest random and extreme buffer, in elements, for both widths.
    pub max_len: usize,
    pub rounds: usize,
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_len: 1 << 15,
            rounds: 64,
            seed: 0x5eed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    Alignment,
    BatchBoundary,
    Random,
    Extreme,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub kind: CaseKind,
    pub width: u8,
    pub len: usize,
    pub lead_in: usize,
    pub sanitize: Option<i8>,
    pub scalar: i64,
    pub vector: i64,
}

impl CaseResult {
    pub fn agrees(&self) -> bool {
        self.scalar == self.vector
    }
}

/// Copy of a buffer placed `lead` elements before an `align`-byte boundary.
#[derive(Debug, Clone)]
pub struct Staged<T> {
    storage: Vec<T>,
    start: usize,
    len: usize,
}

impl<T: Copy + Default> Staged<T> {
    pub fn new(data: &[T], align: usize, lead: usize) -> Self {
        let size = std::mem::size_of::<T>();
        let per = (align / size).max(1);
        let lead = lead % per;
        let mut storage = vec![T::default(); data.len() + 2 * per];
        let base = align_padding(storage.as_ptr() as usize, align.max(size)) / size;
        let start = base + per - lead;
        storage[start..start + data.len()].copy_from_slice(data);
        Self {
            storage,
            start,
            len: data.len(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage[self.start..self.start + self.len]
    }
}

/// Runs every sweep against engine `E`.
pub fn run<E: ByteLanes + DwordLanes>(config: &SweepConfig) -> Vec<CaseResult> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut cases = Vec::new();
    alignment_sweep::<E>(&mut rng, &mut cases);
    batch_sweep::<E>(&mut rng, &mut cases);
    random_sweep::<E>(&mut rng, config, &mut cases);
    extreme_sweep::<E>(config.max_len, &mut cases);
    cases
}

pub fn mismatches(cases: &[CaseResult]) -> usize {
    cases.iter().filter(|c| !c.agrees()).count()
}

pub fn write_cases(path: &Path, cases: &[CaseResult]) -> Result<(), CheckError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;
    for case in cases {
        writer.serialize(case)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn check8<E: ByteLanes>(
    kind: CaseKind,
    values: &[i8],
    sanitize: SanitizeValue,
) -> CaseResult {
    CaseResult {
        kind,
        width: 8,
        len: values.len(),
        lead_in: lead_in(values, <E as ByteLanes>::ALIGN),
        sanitize: Some(sanitize.get()),
        scalar: scalar::sum8(values, sanitize),
        vector: sum8_with::<E>(values, sanitize),
    }
}

pub fn check32<E: DwordLanes>(kind: CaseKind, values: &[i32]) -> CaseResult {
    CaseResult {
        kind,
        width: 32,
        len: values.len(),
        lead_in: lead_in(values, <E as DwordLanes>::ALIGN),
        sanitize: None,
        scalar: scalar::sum32(values),
        vector: sum32_with::<E>(values),
    }
}

fn alignment_sweep<E: ByteLanes + DwordLanes>(rng: &mut StdRng, cases: &mut Vec<CaseResult>) {
    let w8 = <E as ByteLanes>::WIDTH;
    let align8 = <E as ByteLanes>::ALIGN;
    let batch = batch_len::<E>();
    for lead in 0..align8 {
        for len in [1, w8.saturating_sub(1), w8, lead + w8, 3 * w8 + 5, batch + 2 * w8 + 3] {
            let data = random_i8(rng, len);
            let sanitize = pick_sanitize(rng, &data);
            let staged = Staged::new(&data, align8, lead);
            cases.push(check8::<E>(CaseKind::Alignment, staged.as_slice(), sanitize));
        }
    }

    let w32 = <E as DwordLanes>::WIDTH;
    let align32 = <E as DwordLanes>::ALIGN;
    for lead in 0..(align32 / 4).max(1) {
        for len in [1, w32.saturating_sub(1), w32, lead + w32, 3 * w32 + 5, 257] {
            let data = random_i32(rng, len);
            let staged = Staged::new(&data, align32, lead);
            cases.push(check32::<E>(CaseKind::Alignment, staged.as_slice()));
        }
    }
}

fn batch_sweep<E: ByteLanes + DwordLanes>(rng: &mut StdRng, cases: &mut Vec<CaseResult>) {
    let align8 = <E as ByteLanes>::ALIGN;
    let batch = batch_len::<E>();
    for multiple in 1..=3 {
        for len in [multiple * batch - 1, multiple * batch, multiple * batch + 1] {
            for lead in [0, align8 / 2] {
                let data = random_i8(rng, len);
                let sanitize = pick_sanitize(rng, &data);
                let staged = Staged::new(&data, align8, lead);
                cases.push(check8::<E>(CaseKind::BatchBoundary, staged.as_slice(), sanitize));
            }
        }
    }

    let w32 = <E as DwordLanes>::WIDTH;
    let align32 = <E as DwordLanes>::ALIGN;
    for multiple in 1..=4 {
        for len in [multiple * w32 - 1, multiple * w32, multiple * w32 + 1] {
            let data = random_i32(rng, len);
            let staged = Staged::new(&data, align32, 1);
            cases.push(check32::<E>(CaseKind::BatchBoundary, staged.as_slice()));
        }
    }
}

fn random_sweep<E: ByteLanes + DwordLanes>(
    rng: &mut StdRng,
    config: &SweepConfig,
    cases: &mut Vec<CaseResult>,
) {
    let align8 = <E as ByteLanes>::ALIGN;
    let align32 = <E as DwordLanes>::ALIGN;
    for _ in 0..config.rounds {
        let len = rng.random_range(0..=config.max_len);
        let data = random_i8(rng, len);
        let sanitize = pick_sanitize(rng, &data);
        let staged = Staged::new(&data, align8, rng.random_range(0..align8));
        cases.push(check8::<E>(CaseKind::Random, staged.as_slice(), sanitize));

        let len = rng.random_range(0..=config.max_len);
        let data = random_i32(rng, len);
        let staged = Staged::new(&data, align32, rng.random_range(0..(align32 / 4).max(1)));
        cases.push(check32::<E>(CaseKind::Random, staged.as_slice()));
    }
}

fn extreme_sweep<E: ByteLanes + DwordLanes>(len: usize, cases: &mut Vec<CaseResult>) {
    let minimum = vec![i8::MIN; len];
    cases.push(check8::<E>(CaseKind::Extreme, &minimum, SanitizeValue(i8::MAX)));
    cases.push(check8::<E>(CaseKind::Extreme, &minimum, SanitizeValue::DEFAULT));
    let maximum = vec![i8::MAX; len];
    cases.push(check8::<E>(CaseKind::Extreme, &maximum, SanitizeValue::DEFAULT));

    cases.push(check32::<E>(CaseKind::Extreme, &vec![i32::MIN; len]));
    cases.push(check32::<E>(CaseKind::Extreme, &vec![i32::MAX; len]));
}

fn random_i8(rng: &mut StdRng, len: usize) -> Vec<i8> {
    (0..len).map(|_| rng.random::<i8>()).collect()
}

fn random_i32(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random::<i32>()).collect()
}

/// Half the time a value present in `data`, so exclusion is exercised.
fn pick_sanitize(rng: &mut StdRng, data: &[i8]) -> SanitizeValue {
    if !data.is_empty() && rng.random_bool(0.5) {
        SanitizeValue(data[rng.random_range(0..data.len())])
    } else {
        SanitizeValue(rng.random::<i8>())
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/conformance.rs"]
mod tests;
