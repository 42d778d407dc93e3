//! Widening sums over 8-bit and 32-bit signed buffers.
//!
//! Two reducers exist for each width. `scalar` is the sequential reference;
//! `vector` runs the aligned, batched lane-engine reduction. They never call
//! each other and must agree on every input.

pub mod scalar;
pub mod vector;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel excluded from 8-bit sums, marking a missing or invalid sample.
///
/// Defaults to `i8::MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SanitizeValue(pub i8);

impl SanitizeValue {
    pub const DEFAULT: SanitizeValue = SanitizeValue(i8::MIN);

    pub fn get(self) -> i8 {
        self.0
    }
}

impl Default for SanitizeValue {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i8> for SanitizeValue {
    fn from(value: i8) -> Self {
        SanitizeValue(value)
    }
}

impl fmt::Display for SanitizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which implementation a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reducer {
    Scalar,
    #[default]
    Vector,
}

impl Reducer {
    pub const ALL: [Reducer; 2] = [Reducer::Scalar, Reducer::Vector];

    pub fn name(self) -> &'static str {
        match self {
            Reducer::Scalar => "scalar",
            Reducer::Vector => "vector",
        }
    }

    pub fn sum8(self, values: &[i8], sanitize: SanitizeValue) -> i64 {
        match self {
            Reducer::Scalar => scalar::sum8(values, sanitize),
            Reducer::Vector => vector::sum8(values, sanitize),
        }
    }

    pub fn sum32(self, values: &[i32]) -> i64 {
        match self {
            Reducer::Scalar => scalar::sum32(values),
            Reducer::Vector => vector::sum32(values),
        }
    }
}

impl fmt::Display for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element width of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ElementWidth {
    #[default]
    Bits8,
    Bits32,
}

impl ElementWidth {
    pub fn bits(self) -> u8 {
        match self {
            ElementWidth::Bits8 => 8,
            ElementWidth::Bits32 => 32,
        }
    }

    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported element width: {0} (expected 8 or 32)")]
pub struct UnsupportedWidth(pub u8);

impl TryFrom<u8> for ElementWidth {
    type Error = UnsupportedWidth;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(ElementWidth::Bits8),
            32 => Ok(ElementWidth::Bits32),
            other => Err(UnsupportedWidth(other)),
        }
    }
}

impl From<ElementWidth> for u8 {
    fn from(width: ElementWidth) -> u8 {
        width.bits()
    }
}

impl fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Sum of `values` excluding elements equal to `sanitize`.
#[inline]
pub fn sum8(values: &[i8], sanitize: SanitizeValue) -> i64 {
    vector::sum8(values, sanitize)
}

/// Sum of all `values`.
#[inline]
pub fn sum32(values: &[i32]) -> i64 {
    vector::sum32(values)
}

#[cfg(test)]
#[path = "../../tests/src_inline/sum/mod.rs"]
mod tests;
