//! Knobs shared by every exercise routine.
//!
//! The binaries run with [`PipelineConfig::default`]; TOML loading exists so
//! tests and embedders can shrink the ranges or shorten the delay.
//!
//! ```toml
//! range_len = 1000
//! delay_ms = 1000
//! log_level = "warn"
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Length of the long ranges (map/zip/filter/concat routines).
    pub range_len: i64,
    /// Length of the short ranges (skip/take routines).
    pub short_range_len: i64,
    /// Exclusive upper bound for randomized values.
    pub random_bound: i32,
    /// Exclusive upper bound for the digit side of the zip.
    pub digit_bound: i32,
    /// Alphabet size used for letter codes.
    pub letter_count: i32,
    pub threshold: i32,
    pub skip_count: usize,
    pub take_count: usize,
    pub delay_ms: u64,
    /// Largest range a routine may request.
    pub max_range_len: i64,
    pub log_level: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            range_len: 1000,
            short_range_len: 10,
            random_bound: 1000,
            digit_bound: 10,
            letter_count: 26,
            threshold: 500,
            skip_count: 3,
            take_count: 5,
            delay_ms: 1000,
            max_range_len: 1_000_000,
            log_level: "warn".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| PipelineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Rejects settings no routine could run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_range_len < 0 {
            return Err(PipelineError::invalid_argument(
                "max_range_len",
                self.max_range_len,
                "must not be negative",
            ));
        }
        for (name, len) in [
            ("range_len", self.range_len),
            ("short_range_len", self.short_range_len),
        ] {
            self.check_range_len(name, len)?;
        }
        for (name, bound) in [
            ("random_bound", self.random_bound),
            ("digit_bound", self.digit_bound),
            ("letter_count", self.letter_count),
        ] {
            if bound <= 0 {
                return Err(PipelineError::invalid_argument(
                    name,
                    bound.into(),
                    "bound must be positive",
                ));
            }
        }
        if self.letter_count > 26 {
            return Err(PipelineError::invalid_argument(
                "letter_count",
                self.letter_count.into(),
                "only 26 uppercase letters exist",
            ));
        }
        Ok(())
    }

    pub(crate) fn check_range_len(&self, name: &'static str, len: i64) -> Result<()> {
        if len < 0 {
            return Err(PipelineError::invalid_argument(
                name,
                len,
                "must not be negative",
            ));
        }
        if len > self.max_range_len {
            return Err(PipelineError::invalid_argument(
                name,
                len,
                format!("exceeds the limit of {}", self.max_range_len),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_exercises() {
        let config = PipelineConfig::default();
        assert_eq!(config.range_len, 1000);
        assert_eq!(config.short_range_len, 10);
        assert_eq!(config.random_bound, 1000);
        assert_eq!(config.threshold, 500);
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PipelineConfig::from_toml_str("range_len = 20\ndelay_ms = 5\n").unwrap();
        assert_eq!(config.range_len, 20);
        assert_eq!(config.delay_ms, 5);
        assert_eq!(config.take_count, 5);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = PipelineConfig::from_toml_str("range_len = \"lots\"").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_rejects_oversized_range() {
        let err = PipelineConfig::from_toml_str("range_len = 50\nmax_range_len = 10\n")
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_rejects_non_positive_bound() {
        let config = PipelineConfig {
            random_bound: 0,
            ..PipelineConfig::default()
        };
        assert!(config.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_rejects_too_many_letters() {
        let config = PipelineConfig {
            letter_count: 27,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
