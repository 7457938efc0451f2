//! Null-aware reducers.
//!
//! Every reducer skips missing readings. Over an all-missing input `sum`,
//! `mean`, `min` and `max` return `None`, never zero or NaN.

use airq_core::{Reading, StatSummary};
use airq_ingestion::normalize_reading;
use ordered_float::OrderedFloat;

fn valid(values: &[Reading]) -> impl Iterator<Item = f64> + '_ {
    values.iter().filter_map(|&v| normalize_reading(v))
}

/// Number of non-missing readings.
pub fn count(values: &[Reading]) -> usize {
    valid(values).count()
}

/// Number of missing readings.
pub fn missing_count(values: &[Reading]) -> usize {
    values.len() - count(values)
}

/// Sum of non-missing readings, or `None` when there are none.
pub fn sum(values: &[Reading]) -> Reading {
    valid(values).fold(None, |acc, v| Some(acc.unwrap_or(0.0) + v))
}

/// Mean of non-missing readings. Always equals `sum / count` when `count > 0`.
pub fn mean(values: &[Reading]) -> Reading {
    let n = count(values);
    if n == 0 {
        return None;
    }
    sum(values).map(|s| s / n as f64)
}

/// Minimum non-missing reading.
pub fn min(values: &[Reading]) -> Reading {
    valid(values).map(OrderedFloat).min().map(|v| v.0)
}

/// Maximum non-missing reading.
pub fn max(values: &[Reading]) -> Reading {
    valid(values).map(OrderedFloat).max().map(|v| v.0)
}

/// Sum that does not skip gaps: any missing reading makes the result missing.
///
/// Backs the raw `daily_average` / `diurnal_average` outputs, which keep this
/// weaker policy instead of the null-aware one used by the statistics.
pub fn propagating_sum(values: &[Reading]) -> Reading {
    values
        .iter()
        .try_fold(0.0, |acc, &v| normalize_reading(v).map(|v| acc + v))
}

/// Count, min, mean and max of the non-missing readings.
pub fn summarize(values: &[Reading]) -> StatSummary {
    StatSummary {
        count: count(values),
        min: min(values),
        mean: mean(values),
        max: max(values),
    }
}

/// Round half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round every present reading; missing (and non-finite) readings come out as `None`.
pub fn round_and_normalize(values: &[Reading], digits: u32) -> Vec<Reading> {
    values
        .iter()
        .map(|&v| normalize_reading(v).map(|v| round_to(v, digits)))
        .collect()
}

/// Summarizes groups of readings and rounds the results for output.
#[derive(Debug, Clone, Copy)]
pub struct NullAwareAggregator {
    digits: u32,
}

impl NullAwareAggregator {
    /// Create an aggregator that rounds to `digits` decimal places.
    pub fn new(digits: u32) -> Self {
        Self { digits }
    }

    /// Decimal places kept in outputs.
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Rounded summary of a group.
    pub fn summarize(&self, values: &[Reading]) -> StatSummary {
        summarize(values).map_values(|v| round_to(v, self.digits))
    }

    /// Rounded raw average: `propagating_sum / divisor`, missing if any reading
    /// is missing or the divisor is zero.
    pub fn raw_average(&self, values: &[Reading], divisor: usize) -> Reading {
        if divisor == 0 {
            return None;
        }
        propagating_sum(values).map(|s| round_to(s / divisor as f64, self.digits))
    }
}

impl Default for NullAwareAggregator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mixed() -> Vec<Reading> {
        vec![Some(16.0), Some(2.0), Some(8.0), Some(f64::NAN), None, None, Some(6.0)]
    }

    fn all_missing() -> Vec<Reading> {
        vec![None, None, Some(f64::NAN), None, None]
    }

    #[test]
    fn test_reducers_skip_missing() {
        let x = mixed();
        assert_eq!(min(&x), Some(2.0));
        assert_eq!(max(&x), Some(16.0));
        assert_eq!(count(&x), 4);
        assert_eq!(missing_count(&x), 3);
        assert_eq!(sum(&x), Some(32.0));
        assert_eq!(mean(&x), Some(8.0));
    }

    #[test]
    fn test_all_missing_is_missing() {
        let x = all_missing();
        assert_eq!(min(&x), None);
        assert_eq!(max(&x), None);
        assert_eq!(count(&x), 0);
        assert_eq!(sum(&x), None);
        assert_eq!(mean(&x), None);
        assert_eq!(summarize(&x), StatSummary::empty());
        assert_eq!(summarize(&[]), StatSummary::empty());
    }

    #[test]
    fn test_sum_distinguishes_zero_from_no_data() {
        assert_eq!(sum(&[Some(0.0), None]), Some(0.0));
        assert_eq!(sum(&[None]), None);
    }

    #[test]
    fn test_negative_extremes() {
        let x = vec![Some(-1.5), Some(-7.25), None];
        assert_eq!(min(&x), Some(-7.25));
        assert_eq!(max(&x), Some(-1.5));
    }

    #[test]
    fn test_propagating_sum() {
        assert_eq!(propagating_sum(&[Some(1.0), Some(2.5)]), Some(3.5));
        assert_eq!(propagating_sum(&[Some(1.0), None]), None);
        assert_eq!(propagating_sum(&[Some(1.0), Some(f64::NAN)]), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.123, 0), 1.0);
        assert_eq!(round_to(1.123, 1), 1.1);
        assert_eq!(round_to(1.123, 2), 1.12);
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert_eq!(round_to(-0.5, 0), -1.0);
        assert_eq!(round_to(f64::MAX, 3), f64::MAX);
        // Precision beyond f64 leaves the value as is.
        assert_eq!(round_to(1.25, u32::MAX), 1.25);
        assert_eq!(round_to(1.25, 400), 1.25);
    }

    #[test]
    fn test_round_and_normalize() {
        let x = vec![
            Some(1.0),
            Some(1.1),
            Some(1.12),
            Some(1.123),
            Some(f64::NAN),
            None,
        ];
        assert_eq!(
            round_and_normalize(&x, 1),
            vec![Some(1.0), Some(1.1), Some(1.1), Some(1.1), None, None]
        );
        assert_eq!(
            round_and_normalize(&x, 2),
            vec![Some(1.0), Some(1.1), Some(1.12), Some(1.12), None, None]
        );
        assert_eq!(
            round_and_normalize(&x, 3),
            vec![Some(1.0), Some(1.1), Some(1.12), Some(1.123), None, None]
        );
    }

    #[test]
    fn test_aggregator_rounds_summary() {
        let agg = NullAwareAggregator::default();
        let summary = agg.summarize(&[Some(1.04), Some(2.0), None, Some(3.0)]);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.mean, Some(2.0));
        assert_eq!(summary.max, Some(3.0));
    }

    #[test]
    fn test_raw_average() {
        let agg = NullAwareAggregator::new(2);
        assert_eq!(agg.digits(), 2);
        assert_eq!(agg.raw_average(&[Some(1.0), Some(2.0), Some(4.0)], 3), Some(2.33));
        assert_eq!(agg.raw_average(&[Some(1.0), None], 2), None);
        assert_eq!(agg.raw_average(&[], 0), None);
    }

    #[test]
    fn test_mean_matches_sum_over_count() {
        let x = vec![Some(0.1), Some(0.2), None, Some(0.3)];
        let expected = sum(&x).unwrap() / count(&x) as f64;
        assert_relative_eq!(mean(&x).unwrap(), expected);
    }
}
