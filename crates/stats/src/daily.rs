//! Daily bucketing.
//!
//! Partitions a series already trimmed to whole local days into consecutive
//! 24-hour buckets. Each bucket is keyed by the instant of its local hour 0.

use crate::aggregator::NullAwareAggregator;
use airq_core::{DailyAverage, DailyStats, HourlySeries, HOURS_PER_DAY};
use tracing::debug;

/// Per-day statistics over trimmed series.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyBucketer {
    aggregator: NullAwareAggregator,
}

impl DailyBucketer {
    /// Create a bucketer whose outputs are rounded to `digits` decimal places.
    pub fn new(digits: u32) -> Self {
        Self {
            aggregator: NullAwareAggregator::new(digits),
        }
    }

    /// Null-aware count/min/mean/max for each local day.
    ///
    /// `trimmed` must start at local hour 0; hours past the last whole day are ignored.
    pub fn stats(&self, trimmed: &HourlySeries) -> DailyStats {
        let mut daily = DailyStats::default();
        for (instants, values) in trimmed
            .instants()
            .chunks_exact(HOURS_PER_DAY)
            .zip(trimmed.values().chunks_exact(HOURS_PER_DAY))
        {
            daily.push(instants[0], self.aggregator.summarize(values));
        }
        debug!(days = daily.len(), "computed daily statistics");
        daily
    }

    /// Raw mean of the 24 readings of each local day.
    ///
    /// Unlike [`DailyBucketer::stats`], gaps are not skipped: one missing
    /// reading makes that day's average missing.
    pub fn average(&self, trimmed: &HourlySeries) -> DailyAverage {
        let mut daily = DailyAverage::default();
        for (instants, values) in trimmed
            .instants()
            .chunks_exact(HOURS_PER_DAY)
            .zip(trimmed.values().chunks_exact(HOURS_PER_DAY))
        {
            daily.push(instants[0], self.aggregator.raw_average(values, HOURS_PER_DAY));
        }
        debug!(days = daily.len(), "computed daily averages");
        daily
    }
}
