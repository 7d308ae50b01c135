//! Calculator configuration.
//!
//! [`CalculatorConfig`] selects the loop shape used to accumulate distances
//! and can be round-tripped through JSON so benchmark and demo runs can be
//! driven from a file.
//!
//! # Example
//!
//! ```
//! use fastcalc::{CalcStrategy, CalculatorConfig};
//!
//! let config = CalculatorConfig::from_json(r#"{ "strategy": "parallel" }"#).unwrap();
//! assert_eq!(config.strategy, CalcStrategy::Parallel);
//! assert_eq!(config.parallel_chunk_size, CalculatorConfig::DEFAULT_CHUNK_SIZE);
//! ```

use crate::error::FastCalcError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How [`HammingDistanceCalculator`](crate::HammingDistanceCalculator) walks
/// its word pairs.
///
/// All strategies produce identical totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcStrategy {
    /// One pair at a time
    Sequential,
    /// Groups of four pairs, then the remainder
    #[default]
    Batched,
    /// Chunks reduced on the rayon thread pool
    Parallel,
}

/// Configuration for distance accumulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Loop shape
    pub strategy: CalcStrategy,
    /// Pairs per rayon task when `strategy` is `Parallel`
    pub parallel_chunk_size: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            strategy: CalcStrategy::default(),
            parallel_chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }
}

impl CalculatorConfig {
    /// Default number of pairs handed to each parallel task.
    pub const DEFAULT_CHUNK_SIZE: usize = 4096;

    /// Create a configuration with the given strategy and default chunk size.
    pub fn with_strategy(strategy: CalcStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_chunk_size == 0 {
            return Err(FastCalcError::InvalidArgument(
                "parallel_chunk_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
