//! NowCast estimator.
//!
//! Recency-weighted moving estimate over the current hour and up to 11
//! preceding hours. The decay weight adapts to the spread of readings in the
//! window: a volatile window leans harder on the most recent hours.
//!
//! See <https://forum.airnowtech.org/t/the-nowcast-for-pm2-5-and-pm10/172>.

use crate::aggregator::round_to;
use airq_core::config::{NowCastConfig, ZeroMaxPolicy};
use airq_core::Reading;
use airq_ingestion::normalize_reading;
use tracing::trace;

/// Readings feeding one estimate, ordered most recent first.
///
/// Each entry carries its recency index (0 = target hour), which is also the
/// exponent of its decay weight.
#[derive(Debug, Clone, PartialEq)]
pub struct NowCastWindow {
    entries: Vec<(usize, Reading)>,
}

impl NowCastWindow {
    /// Build a window from readings in chronological order; the last reading
    /// is the target hour.
    pub fn from_chronological(values: &[Reading]) -> Self {
        let entries = values
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &v)| (i, normalize_reading(v)))
            .collect();
        Self { entries }
    }

    /// A window holding a single reading.
    pub fn single(value: Reading) -> Self {
        Self {
            entries: vec![(0, normalize_reading(value))],
        }
    }

    /// `(recency index, reading)` pairs, most recent first.
    pub fn entries(&self) -> &[(usize, Reading)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn valid(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().filter_map(|&(i, v)| v.map(|v| (i, v)))
    }
}

impl From<f64> for NowCastWindow {
    fn from(value: f64) -> Self {
        Self::single(Some(value))
    }
}

/// Computes NowCast estimates.
#[derive(Debug, Clone)]
pub struct NowCastEstimator {
    config: NowCastConfig,
}

impl NowCastEstimator {
    /// Create a new estimator.
    pub fn new(config: NowCastConfig) -> Self {
        Self { config }
    }

    /// Estimator configuration.
    pub fn config(&self) -> &NowCastConfig {
        &self.config
    }

    /// Estimate for the most recent hour of `window`.
    pub fn estimate(&self, window: &NowCastWindow) -> Reading {
        let recent_valid = window
            .entries
            .iter()
            .take(self.config.recent_hours)
            .filter(|(_, v)| v.is_some())
            .count();
        if recent_valid < self.config.min_recent_valid {
            return None;
        }

        let (min, max) = window.valid().fold(None, |acc: Option<(f64, f64)>, (_, v)| {
            Some(match acc {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            })
        })?;

        let rate_of_change = if max == 0.0 {
            match self.config.zero_max {
                ZeroMaxPolicy::ZeroRate => 0.0,
                ZeroMaxPolicy::Missing => {
                    trace!("window maximum is zero; estimate is missing");
                    return None;
                }
            }
        } else {
            (max - min) / max
        };
        let weight_factor = (1.0 - rate_of_change)
            .max(self.config.min_weight_factor)
            .min(1.0);

        let (weighted_sum, weight_total) =
            window.valid().fold((0.0, 0.0), |(sum, total), (i, v)| {
                let weight = weight_factor.powi(i as i32);
                (sum + weight * v, total + weight)
            });
        if weight_total <= 0.0 {
            return None;
        }

        let estimate = weighted_sum / weight_total;
        estimate
            .is_finite()
            .then(|| round_to(estimate, self.config.digits))
    }

    /// One estimate per hour of a chronological series, using only that hour
    /// and the preceding `window_hours - 1` hours.
    pub fn series(&self, values: &[Reading]) -> Vec<Reading> {
        (0..values.len())
            .map(|i| {
                let start = (i + 1).saturating_sub(self.config.window_hours);
                self.estimate(&NowCastWindow::from_chronological(&values[start..=i]))
            })
            .collect()
    }
}

impl Default for NowCastEstimator {
    fn default() -> Self {
        Self::new(NowCastConfig::default())
    }
}

/// NowCast series with the standard 12-hour window.
pub fn now_cast(values: &[Reading]) -> Vec<Reading> {
    NowCastEstimator::default().series(values)
}
