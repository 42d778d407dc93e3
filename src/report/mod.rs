pub mod json;
pub mod text;

use serde::Serialize;

use crate::simd;
use crate::sum::{ElementWidth, Reducer, SanitizeValue};

#[derive(Debug, Clone, Serialize)]
pub struct SumReport {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub result: ResultSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
    pub simd: String,
}

impl Default for ToolSummary {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            simd: simd::backend_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: Option<String>,
    pub width: ElementWidth,
    pub count: usize,
    pub crc64: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub reducer: Reducer,
    /// Only meaningful for 8-bit input.
    pub sanitize: Option<SanitizeValue>,
    pub total: i64,
    pub elapsed_us: u64,
}

pub fn format_crc64(crc: u64) -> String {
    format!("{crc:016x}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
