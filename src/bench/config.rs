//! Benchmark configuration.
//!
//! [`BenchConfig`] is read from the `[benchmark]` table of a TOML file.
//! Missing keys fall back to [`BenchConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::input::element_counts;
use crate::error::{BenchError, BenchResult};
use crate::select::DEFAULT_PREFIX;

/// Largest accepted power of ten for element counts.
const MAX_POWER: f64 = 9.0;

/// Configuration for a benchmark run.
///
/// # Examples
///
/// ```
/// use u_nlargest::bench::BenchConfig;
///
/// let config = BenchConfig::default()
///     .with_powers(vec![1.0, 2.0, 3.0])
///     .with_count(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.element_counts(), vec![10, 100, 1000]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Exponents of the element counts: each run uses `⌊10^p⌋` elements.
    pub powers: Vec<f64>,

    /// Only strategies whose registry name starts with this are measured.
    pub prefix: String,

    /// How many of the largest values to select.
    pub count: usize,

    /// Seed of the input generator.
    pub seed: u64,

    /// Inputs are drawn uniformly from `[0, max_value)`.
    pub max_value: i64,

    /// Number of timing trials; the best one is reported.
    pub repetitions: u32,

    /// Minimum duration of one trial in milliseconds. The loop count is
    /// raised until a trial takes at least this long.
    pub min_run_time_ms: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            powers: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            prefix: DEFAULT_PREFIX.to_string(),
            count: 5,
            seed: 42,
            max_value: 1_000_000,
            repetitions: 3,
            min_run_time_ms: 200,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    benchmark: BenchConfig,
}

impl BenchConfig {
    /// Parses a TOML document with a `[benchmark]` table.
    pub fn from_toml_str(source: &str) -> BenchResult<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        file.benchmark.validate().map_err(BenchError::InvalidConfig)?;
        Ok(file.benchmark)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> BenchResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn with_powers(mut self, powers: Vec<f64>) -> Self {
        self.powers = powers;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_min_run_time_ms(mut self, ms: u64) -> Self {
        self.min_run_time_ms = ms;
        self
    }

    /// Element counts derived from [`powers`](Self::powers), in order.
    pub fn element_counts(&self) -> Vec<usize> {
        element_counts(&self.powers)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.powers.is_empty() {
            return Err("powers must not be empty".into());
        }
        if let Some(p) = self
            .powers
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0 || **p > MAX_POWER)
        {
            return Err(format!("powers must lie in [0, {MAX_POWER}], got {p}"));
        }
        if self.count == 0 {
            return Err("count must be at least 1".into());
        }
        let smallest = self.element_counts().into_iter().min().unwrap_or(0);
        if smallest < self.count {
            return Err(format!(
                "smallest element count {smallest} is below count {}",
                self.count
            ));
        }
        if self.max_value < 1 {
            return Err(format!(
                "max_value must be positive, got {}",
                self.max_value
            ));
        }
        if self.repetitions == 0 {
            return Err("repetitions must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.count, 5);
        assert_eq!(config.prefix, "nlargest_");
        assert_eq!(config.repetitions, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_file() {
        let source = r#"
            [benchmark]
            powers = [1.0, 1.2]
            prefix = "my_prefix_"
            count = 3
            seed = 7
            max_value = 99
            repetitions = 5
            min_run_time_ms = 10
        "#;
        let config = BenchConfig::from_toml_str(source).unwrap();
        assert_eq!(config.powers, vec![1.0, 1.2]);
        assert_eq!(config.prefix, "my_prefix_");
        assert_eq!(config.count, 3);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_value, 99);
        assert_eq!(config.repetitions, 5);
        assert_eq!(config.min_run_time_ms, 10);
        assert_eq!(config.element_counts(), vec![10, 15]);
    }

    #[test]
    fn test_parse_partial_file_uses_defaults() {
        let config = BenchConfig::from_toml_str("[benchmark]\ncount = 2\n").unwrap();
        assert_eq!(config.count, 2);
        assert_eq!(config.powers, BenchConfig::default().powers);
    }

    #[test]
    fn test_parse_missing_table() {
        let err = BenchConfig::from_toml_str("count = 2\n").unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse(_)));
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = BenchConfig::from_toml_str("[benchmark]\nmodule_name = \"x\"\n").unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse(_)));
    }

    #[test]
    fn test_parse_invalid_values() {
        let err = BenchConfig::from_toml_str("[benchmark]\ncount = 0\n").unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_empty_powers() {
        let config = BenchConfig::default().with_powers(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_power_out_of_range() {
        for power in [-1.0, 12.0, f64::NAN] {
            let config = BenchConfig::default().with_powers(vec![power]);
            assert!(config.validate().is_err(), "power {power}");
        }
    }

    #[test]
    fn test_validate_count_exceeds_smallest_run() {
        let config = BenchConfig::default().with_powers(vec![0.0, 3.0]).with_count(5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_repetitions_and_range() {
        let config = BenchConfig::default().with_repetitions(0);
        assert!(config.validate().is_err());
        let config = BenchConfig::default().with_max_value(0);
        assert!(config.validate().is_err());
    }
}
