use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Parameters for the timing harness.
///
/// Every field has a default, so a TOML file only needs the keys it wants to
/// change:
///
/// ```toml
/// batch_size = 8
/// repetitions = 200
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Length of the input sequence `0..input_len`.
    pub input_len: usize,
    pub batch_size: usize,
    /// How many times each strategy is run (and fully drained) per timing.
    pub repetitions: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input_len: 10_000,
            batch_size: 5,
            repetitions: 1_000,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "batch_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.repetitions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "repetitions",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The benchmark input: `0..input_len`.
    pub fn input(&self) -> Vec<usize> {
        (0..self.input_len).collect()
    }
}
