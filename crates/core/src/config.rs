//! Configuration structures for the air-quality algorithms.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest rounding precision accepted for outputs; an f64 carries about 15
/// significant decimal digits.
pub const MAX_DIGITS: u32 = 15;

fn check_digits(field: &str, digits: u32) -> Result<()> {
    if digits > MAX_DIGITS {
        return Err(Error::config(format!("{field} must be at most {MAX_DIGITS}, got {digits}")));
    }
    Ok(())
}

/// Main configuration for the statistics engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Daily / diurnal statistics configuration.
    pub stats: StatsConfig,
    /// NowCast estimator configuration.
    pub nowcast: NowCastConfig,
}

impl Config {
    /// Parse a configuration from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        self.stats.validate()?;
        self.nowcast.validate()
    }
}

/// Daily and diurnal statistics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Decimal places kept in min/mean/max outputs.
    pub digits: u32,
    /// Number of most recent local days used by diurnal statistics.
    pub diurnal_day_count: usize,
    /// Reject series whose instants are not exactly one hour apart.
    pub validate_spacing: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            digits: 1,
            diurnal_day_count: 7,
            validate_spacing: true,
        }
    }
}

impl StatsConfig {
    fn validate(&self) -> Result<()> {
        if self.diurnal_day_count == 0 {
            return Err(Error::config("stats.diurnal_day_count must be at least 1"));
        }
        check_digits("stats.digits", self.digits)
    }
}

/// How NowCast treats a window whose largest valid reading is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroMaxPolicy {
    /// Treat the rate of change as zero (full weight), so an all-zero window
    /// estimates 0.0.
    #[default]
    ZeroRate,
    /// Report the estimate as missing.
    Missing,
}

/// NowCast estimator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NowCastConfig {
    /// Hours in the sliding window, including the target hour.
    pub window_hours: usize,
    /// Most recent hours checked by the recency guard.
    pub recent_hours: usize,
    /// Valid readings required among the most recent hours.
    pub min_recent_valid: usize,
    /// Lower clamp for the decay weight factor.
    pub min_weight_factor: f64,
    /// Decimal places kept in estimates.
    pub digits: u32,
    /// Policy for windows whose maximum valid reading is zero.
    pub zero_max: ZeroMaxPolicy,
}

impl Default for NowCastConfig {
    fn default() -> Self {
        Self {
            window_hours: 12,
            recent_hours: 3,
            min_recent_valid: 2,
            min_weight_factor: 0.5,
            digits: 1,
            zero_max: ZeroMaxPolicy::ZeroRate,
        }
    }
}

impl NowCastConfig {
    fn validate(&self) -> Result<()> {
        if self.window_hours == 0 {
            return Err(Error::config("nowcast.window_hours must be at least 1"));
        }
        if self.recent_hours == 0 || self.recent_hours > self.window_hours {
            return Err(Error::config(format!(
                "nowcast.recent_hours must be in 1..={}, got {}",
                self.window_hours, self.recent_hours
            )));
        }
        if self.min_recent_valid > self.recent_hours {
            return Err(Error::config(format!(
                "nowcast.min_recent_valid ({}) exceeds recent_hours ({})",
                self.min_recent_valid, self.recent_hours
            )));
        }
        if !(self.min_weight_factor > 0.0 && self.min_weight_factor <= 1.0) {
            return Err(Error::config(format!(
                "nowcast.min_weight_factor must be in (0, 1], got {}",
                self.min_weight_factor
            )));
        }
        check_digits("nowcast.digits", self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.stats.digits, 1);
        assert_eq!(config.stats.diurnal_day_count, 7);
        assert_eq!(config.nowcast.window_hours, 12);
        assert_eq!(config.nowcast.min_weight_factor, 0.5);
        assert_eq!(config.nowcast.zero_max, ZeroMaxPolicy::ZeroRate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json_str(
            r#"{ "stats": { "diurnal_day_count": 3 }, "nowcast": { "zero_max": "missing" } }"#,
        )
        .unwrap();
        assert_eq!(config.stats.diurnal_day_count, 3);
        assert_eq!(config.stats.digits, 1);
        assert!(config.stats.validate_spacing);
        assert_eq!(config.nowcast.zero_max, ZeroMaxPolicy::Missing);
        assert_eq!(config.nowcast.recent_hours, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Config::from_json_str(r#"{ "nowcast": { "min_weight_factor": 0.0 } }"#);
        assert!(matches!(err, Err(Error::Config(_))));

        let err = Config::from_json_str(r#"{ "nowcast": { "min_recent_valid": 4 } }"#);
        assert!(matches!(err, Err(Error::Config(_))));

        let err = Config::from_json_str(r#"{ "stats": { "diurnal_day_count": 0 } }"#);
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn test_digits_bounded() {
        assert!(Config::from_json_str(r#"{ "stats": { "digits": 15 } }"#).is_ok());

        let err = Config::from_json_str(r#"{ "stats": { "digits": 16 } }"#).unwrap_err();
        assert!(err.to_string().contains("stats.digits"));

        let err = Config::from_json_str(r#"{ "nowcast": { "digits": 4294967295 } }"#);
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_json_file("/nonexistent/airq.json");
        assert!(matches!(err, Err(Error::Io(_))));
    }
}
