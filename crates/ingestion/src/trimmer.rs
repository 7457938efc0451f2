//! Trimming to whole local days.
//!
//! Discards the partial leading and trailing days of a regular hourly series so
//! that it starts at local hour 0 and ends at local hour 23, with every 24-hour
//! block in between lined up on local midnight.

use crate::timezone::LocalHourSource;
use airq_core::{HourlySeries, Timestamp, HOURS_PER_DAY};
use tracing::{debug, warn};

/// Trims hourly series to whole days in a fixed local timezone.
#[derive(Debug, Clone)]
pub struct TimeZoneBoundaryTrimmer<Z> {
    zone: Z,
}

impl<Z: LocalHourSource> TimeZoneBoundaryTrimmer<Z> {
    /// Create a trimmer for the given timezone.
    pub fn new(zone: Z) -> Self {
        Self { zone }
    }

    /// Compute the `[start, end)` index range covering whole local days.
    ///
    /// Every 24-hour block of the range starts at local hour 0 and ends at local
    /// hour 23. When a DST transition makes some local day 23 or 25 hours long,
    /// the series splits into several such runs; the longest is kept, the most
    /// recent one on ties. Returns `(0, 0)` when the series holds no complete
    /// local day.
    pub fn bounds(&self, instants: &[Timestamp]) -> (usize, usize) {
        let mut best = (0, 0);
        let mut runs = 0usize;
        let mut cursor = self.next_midnight(instants, 0);
        while let Some(start) = cursor {
            let end = start + self.aligned_days(instants, start) * HOURS_PER_DAY;
            if end > start {
                runs += 1;
                if end - start >= best.1 - best.0 {
                    best = (start, end);
                }
            }
            cursor = self.next_midnight(instants, end.max(start + 1));
        }

        if runs > 1 {
            warn!(
                runs,
                start = best.0,
                end = best.1,
                "local day length changes inside the series; keeping the longest aligned run"
            );
        }
        best
    }

    fn hour(&self, instant: Timestamp) -> usize {
        self.zone.local_hour(instant) as usize
    }

    /// First index at or after `from` that falls on local hour 0.
    fn next_midnight(&self, instants: &[Timestamp], from: usize) -> Option<usize> {
        (from..instants.len()).find(|&i| self.hour(instants[i]) == 0)
    }

    /// Consecutive whole local days starting at `start`.
    fn aligned_days(&self, instants: &[Timestamp], start: usize) -> usize {
        instants[start..]
            .chunks_exact(HOURS_PER_DAY)
            .take_while(|day| {
                self.hour(day[0]) == 0 && self.hour(day[HOURS_PER_DAY - 1]) == HOURS_PER_DAY - 1
            })
            .count()
    }

    /// Trim a series to whole local days. The input is left untouched.
    pub fn trim(&self, series: &HourlySeries) -> HourlySeries {
        let (start, end) = self.bounds(series.instants());
        debug!(
            len = series.len(),
            start,
            end,
            days = (end - start) / HOURS_PER_DAY,
            "trimmed series to whole local days"
        );
        if start == end {
            return HourlySeries::empty();
        }
        series.slice(start, end)
    }
}

/// Trim `series` to whole local days in `zone`.
pub fn trim_to_local_days<Z: LocalHourSource>(series: &HourlySeries, zone: Z) -> HourlySeries {
    TimeZoneBoundaryTrimmer::new(zone).trim(series)
}
