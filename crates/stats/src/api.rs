//! Slice-based entry points with default configuration.
//!
//! Each function pairs `instants` with `values`, validates the pairing and the
//! hourly spacing, and runs a default [`StatsEngine`].

use crate::engine::StatsEngine;
use airq_core::{
    DailyAverage, DailyStats, DiurnalAverage, DiurnalStats, HourlySeries, Reading, Result,
    Timestamp,
};

/// Default number of days used by the diurnal functions.
pub const DEFAULT_DIURNAL_DAYS: usize = 7;

fn series(instants: &[Timestamp], values: &[Reading]) -> Result<HourlySeries> {
    HourlySeries::new(instants.to_vec(), values.to_vec())
}

/// Trim to whole local days in `timezone`.
pub fn trim_to_local_days(
    instants: &[Timestamp],
    values: &[Reading],
    timezone: &str,
) -> Result<HourlySeries> {
    StatsEngine::default().trim_to_local_days(&series(instants, values)?, timezone)
}

/// Null-aware count/min/mean/max per whole local day.
pub fn daily_stats(instants: &[Timestamp], values: &[Reading], timezone: &str) -> Result<DailyStats> {
    StatsEngine::default().daily_stats(&series(instants, values)?, timezone)
}

/// Raw mean per whole local day; any gap makes that day missing.
pub fn daily_average(
    instants: &[Timestamp],
    values: &[Reading],
    timezone: &str,
) -> Result<DailyAverage> {
    StatsEngine::default().daily_average(&series(instants, values)?, timezone)
}

/// Null-aware count/min/mean/max per local hour over the most recent `day_count` days.
pub fn diurnal_stats(
    instants: &[Timestamp],
    values: &[Reading],
    timezone: &str,
    day_count: usize,
) -> Result<DiurnalStats> {
    StatsEngine::default().diurnal_stats(&series(instants, values)?, timezone, Some(day_count))
}

/// Raw mean per local hour over the most recent `day_count` days.
pub fn diurnal_average(
    instants: &[Timestamp],
    values: &[Reading],
    timezone: &str,
    day_count: usize,
) -> Result<DiurnalAverage> {
    StatsEngine::default().diurnal_average(&series(instants, values)?, timezone, Some(day_count))
}
