//! Core data types for the air-quality algorithms.

use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// UTC instant of an hourly measurement.
pub type Timestamp = DateTime<Utc>;

/// A single measurement. `None` is the one missing-value marker.
pub type Reading = Option<f64>;

/// Hours in a local day.
pub const HOURS_PER_DAY: usize = 24;

/// A regular hourly series of readings.
///
/// Instants and values always have the same length, including after
/// deserialization. Hourly spacing is a caller precondition checked by
/// `airq_ingestion::validate_hourly_spacing`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHourlySeries")]
pub struct HourlySeries {
    instants: Vec<Timestamp>,
    values: Vec<Reading>,
}

/// Unchecked wire form of [`HourlySeries`].
#[derive(Deserialize)]
struct RawHourlySeries {
    instants: Vec<Timestamp>,
    values: Vec<Reading>,
}

impl TryFrom<RawHourlySeries> for HourlySeries {
    type Error = Error;

    fn try_from(raw: RawHourlySeries) -> Result<Self> {
        Self::new(raw.instants, raw.values)
    }
}

impl HourlySeries {
    /// Pair instants with values, rejecting mismatched lengths.
    pub fn new(instants: Vec<Timestamp>, values: Vec<Reading>) -> Result<Self> {
        if instants.len() != values.len() {
            return Err(Error::invalid_shape(format!(
                "{} instants but {} values",
                instants.len(),
                values.len()
            )));
        }
        Ok(Self { instants, values })
    }

    /// Build a series on a regular hourly axis starting at `start`.
    pub fn hourly(start: Timestamp, values: Vec<Reading>) -> Self {
        let instants = (0..values.len())
            .map(|i| start + Duration::hours(i as i64))
            .collect();
        Self { instants, values }
    }

    /// An empty series.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of hours in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    /// Whether the series has no hours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// Measurement instants.
    pub fn instants(&self) -> &[Timestamp] {
        &self.instants
    }

    /// Measurement values.
    pub fn values(&self) -> &[Reading] {
        &self.values
    }

    /// First instant, if any.
    pub fn first_instant(&self) -> Option<Timestamp> {
        self.instants.first().copied()
    }

    /// Last instant, if any.
    pub fn last_instant(&self) -> Option<Timestamp> {
        self.instants.last().copied()
    }

    /// Copy out the hours in `[start, end)`. Out-of-range bounds are clamped.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self {
            instants: self.instants[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
        }
    }

    /// Iterate over `(instant, reading)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Timestamp, Reading)> + '_ {
        self.instants.iter().copied().zip(self.values.iter().copied())
    }
}

/// Null-aware summary of a group of readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    /// Number of non-missing readings.
    pub count: usize,
    /// Minimum non-missing reading.
    pub min: Reading,
    /// Mean of non-missing readings.
    pub mean: Reading,
    /// Maximum non-missing reading.
    pub max: Reading,
}

impl StatSummary {
    /// Summary of a group with no valid readings.
    pub fn empty() -> Self {
        Self {
            count: 0,
            min: None,
            mean: None,
            max: None,
        }
    }

    /// Apply `f` to each present min/mean/max value.
    pub fn map_values(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            count: self.count,
            min: self.min.map(&f),
            mean: self.mean.map(&f),
            max: self.max.map(&f),
        }
    }
}

/// Per-local-day statistics. Each day is keyed by the UTC instant of its local hour 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub day_start: Vec<Timestamp>,
    pub count: Vec<usize>,
    pub min: Vec<Reading>,
    pub mean: Vec<Reading>,
    pub max: Vec<Reading>,
}

impl DailyStats {
    /// Append one day.
    pub fn push(&mut self, day_start: Timestamp, summary: StatSummary) {
        self.day_start.push(day_start);
        self.count.push(summary.count);
        self.min.push(summary.min);
        self.mean.push(summary.mean);
        self.max.push(summary.max);
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.day_start.len()
    }

    /// Whether no full local day was available.
    pub fn is_empty(&self) -> bool {
        self.day_start.is_empty()
    }

    /// Summary for day `i`.
    pub fn summary(&self, i: usize) -> Option<StatSummary> {
        (i < self.len()).then(|| StatSummary {
            count: self.count[i],
            min: self.min[i],
            mean: self.mean[i],
            max: self.max[i],
        })
    }
}

/// Per-local-day raw averages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub day_start: Vec<Timestamp>,
    pub average: Vec<Reading>,
}

impl DailyAverage {
    /// Append one day.
    pub fn push(&mut self, day_start: Timestamp, average: Reading) {
        self.day_start.push(day_start);
        self.average.push(average);
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.day_start.len()
    }

    /// Whether no full local day was available.
    pub fn is_empty(&self) -> bool {
        self.day_start.is_empty()
    }
}

/// Hour-of-day statistics across the most recent local days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiurnalStats {
    pub hour: Vec<u32>,
    pub count: Vec<usize>,
    pub min: Vec<Reading>,
    pub mean: Vec<Reading>,
    pub max: Vec<Reading>,
}

impl DiurnalStats {
    /// Append one local hour.
    pub fn push(&mut self, hour: u32, summary: StatSummary) {
        self.hour.push(hour);
        self.count.push(summary.count);
        self.min.push(summary.min);
        self.mean.push(summary.mean);
        self.max.push(summary.max);
    }

    /// Number of hour buckets (24 once built).
    pub fn len(&self) -> usize {
        self.hour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hour.is_empty()
    }

    /// Summary for local hour `h`.
    pub fn summary(&self, h: usize) -> Option<StatSummary> {
        (h < self.len()).then(|| StatSummary {
            count: self.count[h],
            min: self.min[h],
            mean: self.mean[h],
            max: self.max[h],
        })
    }
}

/// Hour-of-day raw averages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiurnalAverage {
    pub hour: Vec<u32>,
    pub average: Vec<Reading>,
}

impl DiurnalAverage {
    /// Append one local hour.
    pub fn push(&mut self, hour: u32, average: Reading) {
        self.hour.push(hour);
        self.average.push(average);
    }

    pub fn len(&self) -> usize {
        self.hour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hour.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> Timestamp {
        Utc.with_ymd_and_hms(2023, 2, 14, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let instants = vec![start(), start() + Duration::hours(1)];
        let err = HourlySeries::new(instants, vec![Some(1.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidInputShape(_)));
    }

    #[test]
    fn test_hourly_axis() {
        let series = HourlySeries::hourly(start(), vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.instants()[2], start() + Duration::hours(2));
        assert_eq!(series.last_instant(), Some(start() + Duration::hours(2)));

        let pairs: Vec<_> = series.iter().collect();
        assert_eq!(pairs[1], (start() + Duration::hours(1), None));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_deserialize_checks_lengths() {
        let series = HourlySeries::hourly(start(), vec![Some(1.0); 48]);
        let json = serde_json::to_value(&series).unwrap();
        let back: HourlySeries = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, series);

        let mut truncated = json;
        truncated["values"] = serde_json::json!([]);
        let err = serde_json::from_value::<HourlySeries>(truncated).unwrap_err();
        assert!(err.to_string().contains("48 instants but 0 values"));
        assert!(matches!(Error::from(err), Error::Json(_)));
    }

    #[test]
    fn test_slice_clamps() {
        let series = HourlySeries::hourly(start(), vec![Some(1.0); 5]);
        assert_eq!(series.slice(1, 3).len(), 2);
        assert_eq!(series.slice(4, 10).len(), 1);
        assert!(series.slice(6, 2).is_empty());
    }

    #[test]
    fn test_daily_stats_rows() {
        let mut daily = DailyStats::default();
        assert!(daily.is_empty());
        daily.push(
            start(),
            StatSummary {
                count: 2,
                min: Some(1.0),
                mean: Some(1.5),
                max: Some(2.0),
            },
        );
        assert_eq!(daily.len(), 1);
        assert_eq!(daily.summary(0).unwrap().mean, Some(1.5));
        assert!(daily.summary(1).is_none());
    }

    #[test]
    fn test_map_values_skips_missing() {
        let summary = StatSummary {
            count: 1,
            min: Some(2.0),
            mean: None,
            max: Some(4.0),
        }
        .map_values(|v| v * 10.0);
        assert_eq!(summary.min, Some(20.0));
        assert_eq!(summary.mean, None);
        assert_eq!(summary.max, Some(40.0));
        assert_eq!(summary.count, 1);
    }
}
