//! TOML run configuration. Every key is optional.
//!
//! ```toml
//! [sum]
//! sanitize = -128   # sentinel dropped from 8-bit sums
//! reducer = "vector"
//! width = 8
//!
//! [demo]
//! power = 20        # 2^power bytes, 2^(power-8) dwords
//! offset = 0
//!
//! [check]
//! max_len = 32768  # elements, for both widths
//! rounds = 64
//! seed = 24301
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conformance::SweepConfig;
use crate::sum::{ElementWidth, Reducer, SanitizeValue};

pub const MIN_DEMO_POWER: u32 = 8;
pub const MAX_DEMO_POWER: u32 = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sum: SumSettings,
    pub demo: DemoSettings,
    pub check: CheckSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SumSettings {
    pub sanitize: SanitizeValue,
    pub reducer: Reducer,
    pub width: ElementWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSettings {
    pub power: u32,
    pub offset: usize,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            power: 20,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckSettings {
    pub max_len: usize,
    pub rounds: usize,
    pub seed: u64,
}

impl Default for CheckSettings {
    fn default() -> Self {
        let sweep = SweepConfig::default();
        Self {
            max_len: sweep.max_len,
            rounds: sweep.rounds,
            seed: sweep.seed,
        }
    }
}

impl From<CheckSettings> for SweepConfig {
    fn from(value: CheckSettings) -> Self {
        SweepConfig {
            max_len: value.max_len,
            rounds: value.rounds,
            seed: value.seed,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DEMO_POWER..=MAX_DEMO_POWER).contains(&self.demo.power) {
            return Err(ConfigError::Invalid(format!(
                "demo.power must be within {MIN_DEMO_POWER}..={MAX_DEMO_POWER}, got {}",
                self.demo.power
            )));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path)?;
    Config::from_toml(&text)
}

/// Reads `path` when given, otherwise returns defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
