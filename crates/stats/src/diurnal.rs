//! Hour-of-day (diurnal) bucketing.
//!
//! For each local hour, gathers that hour's readings from the most recent
//! whole local days and reduces them.

use crate::aggregator::NullAwareAggregator;
use airq_core::{DiurnalAverage, DiurnalStats, HourlySeries, Reading, HOURS_PER_DAY};
use tracing::debug;

/// Selection of the most recent days out of a trimmed series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DaySelection {
    /// Index of local hour 0 on the first selected day.
    offset: usize,
    /// Number of selected days.
    days: usize,
}

impl DaySelection {
    fn new(trimmed_len: usize, day_count: usize) -> Self {
        let available = trimmed_len / HOURS_PER_DAY;
        let days = day_count.min(available);
        if days < day_count {
            debug!(requested = day_count, available, "clamped diurnal day count");
        }
        Self {
            offset: trimmed_len - days * HOURS_PER_DAY,
            days,
        }
    }

    /// Readings at local hour `hour` on each selected day, oldest first.
    fn samples(&self, values: &[Reading], hour: usize) -> Vec<Reading> {
        (0..self.days)
            .map(|d| values[self.offset + hour + d * HOURS_PER_DAY])
            .collect()
    }
}

/// Hour-of-day statistics over trimmed series.
#[derive(Debug, Clone, Copy)]
pub struct DiurnalBucketer {
    aggregator: NullAwareAggregator,
    day_count: usize,
}

impl DiurnalBucketer {
    /// Create a bucketer using the most recent `day_count` days and rounding to `digits`.
    pub fn new(digits: u32, day_count: usize) -> Self {
        Self {
            aggregator: NullAwareAggregator::new(digits),
            day_count,
        }
    }

    /// Default number of days used.
    pub fn day_count(&self) -> usize {
        self.day_count
    }

    /// Null-aware statistics per local hour using the configured day count.
    pub fn stats(&self, trimmed: &HourlySeries) -> DiurnalStats {
        self.stats_for_days(trimmed, self.day_count)
    }

    /// Null-aware statistics per local hour over the most recent `day_count` days.
    ///
    /// A `day_count` larger than the number of whole days is clamped. The
    /// output always has 24 rows.
    pub fn stats_for_days(&self, trimmed: &HourlySeries, day_count: usize) -> DiurnalStats {
        let selection = DaySelection::new(trimmed.len(), day_count);
        let mut diurnal = DiurnalStats::default();
        for hour in 0..HOURS_PER_DAY {
            let samples = selection.samples(trimmed.values(), hour);
            diurnal.push(hour as u32, self.aggregator.summarize(&samples));
        }
        diurnal
    }

    /// Raw average per local hour using the configured day count.
    pub fn average(&self, trimmed: &HourlySeries) -> DiurnalAverage {
        self.average_for_days(trimmed, self.day_count)
    }

    /// Raw average per local hour over the most recent `day_count` days.
    ///
    /// The sum is divided by the (clamped) day count, not by the number of
    /// valid samples, and any missing sample makes that hour missing.
    pub fn average_for_days(&self, trimmed: &HourlySeries, day_count: usize) -> DiurnalAverage {
        let selection = DaySelection::new(trimmed.len(), day_count);
        let mut diurnal = DiurnalAverage::default();
        for hour in 0..HOURS_PER_DAY {
            let samples = selection.samples(trimmed.values(), hour);
            diurnal.push(
                hour as u32,
                self.aggregator.raw_average(&samples, selection.days),
            );
        }
        diurnal
    }
}

impl Default for DiurnalBucketer {
    fn default() -> Self {
        Self::new(1, 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    /// `days` whole UTC days where hour `h` of day `d` reads `d * 100 + h`.
    fn series(days: usize) -> HourlySeries {
        let start = Utc.with_ymd_and_hms(2023, 2, 14, 0, 0, 0).unwrap();
        let values = (0..days * HOURS_PER_DAY)
            .map(|i| Some(((i / 24) * 100 + i % 24) as f64))
            .collect();
        HourlySeries::hourly(start, values)
    }

    #[test]
    fn test_selection() {
        assert_eq!(DaySelection::new(240, 7), DaySelection { offset: 72, days: 7 });
        assert_eq!(DaySelection::new(48, 7), DaySelection { offset: 0, days: 2 });
        assert_eq!(DaySelection::new(0, 7), DaySelection { offset: 0, days: 0 });
    }

    #[test]
    fn test_uses_most_recent_days() {
        let diurnal = DiurnalBucketer::default().stats_for_days(&series(5), 2);
        assert_eq!(diurnal.len(), 24);
        assert_eq!(diurnal.hour[5], 5);
        assert_eq!(diurnal.count[5], 2);
        // days 3 and 4
        assert_eq!(diurnal.min[5], Some(305.0));
        assert_eq!(diurnal.max[5], Some(405.0));
        assert_eq!(diurnal.mean[5], Some(355.0));
    }

    #[test]
    fn test_day_count_clamped() {
        let diurnal = DiurnalBucketer::default().stats(&series(3));
        assert_eq!(diurnal.len(), 24);
        assert!(diurnal.count.iter().all(|&c| c == 3));
        assert_eq!(diurnal.mean[0], Some(100.0));
    }

    #[test]
    fn test_no_whole_days() {
        let bucketer = DiurnalBucketer::default();
        let diurnal = bucketer.stats(&HourlySeries::empty());
        assert_eq!(diurnal.len(), 24);
        assert!(diurnal.count.iter().all(|&c| c == 0));
        assert!(diurnal.mean.iter().all(Option::is_none));

        let average = bucketer.average(&HourlySeries::empty());
        assert_eq!(average.len(), 24);
        assert!(average.average.iter().all(Option::is_none));
    }

    #[test]
    fn test_average_divides_by_day_count() {
        let average = DiurnalBucketer::default().average_for_days(&series(4), 4);
        // (0 + 100 + 200 + 300) / 4 + hour
        assert_eq!(average.average[0], Some(150.0));
        assert_eq!(average.average[23], Some(173.0));
    }

    #[test]
    fn test_average_propagates_missing() {
        let start = Utc.with_ymd_and_hms(2023, 2, 14, 0, 0, 0).unwrap();
        let mut values = vec![Some(4.0); 48];
        values[30] = None; // day 1, hour 6
        let trimmed = HourlySeries::hourly(start, values);
        let bucketer = DiurnalBucketer::default();

        let average = bucketer.average_for_days(&trimmed, 2);
        assert_eq!(average.average[6], None);
        assert_eq!(average.average[7], Some(4.0));

        let stats = bucketer.stats_for_days(&trimmed, 2);
        assert_eq!(stats.count[6], 1);
        assert_eq!(stats.mean[6], Some(4.0));
    }
}
