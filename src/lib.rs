pub mod align;
pub mod cli;
pub mod config;
pub mod conformance;
pub mod input;
pub mod report;
pub mod simd;
pub mod sum;

pub mod prelude {
    pub use crate::sum::{ElementWidth, Reducer, SanitizeValue, sum8, sum32};
}
