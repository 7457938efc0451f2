//! Statistics engine.
//!
//! Combines trimming, bucketing and NowCast behind one configured interface.

use crate::{daily::DailyBucketer, diurnal::DiurnalBucketer, nowcast::NowCastEstimator};
use airq_core::{
    config::StatsConfig, Config, DailyAverage, DailyStats, DiurnalAverage, DiurnalStats,
    HourlySeries, Reading, Result,
};
use airq_ingestion::{
    parse_timezone, validate_hourly_spacing, validate_shape, LocalHourSource,
    TimeZoneBoundaryTrimmer,
};

/// Air-quality statistics engine.
#[derive(Debug, Clone)]
pub struct StatsEngine {
    /// Statistics configuration.
    stats: StatsConfig,
    /// Per-day bucketer.
    daily: DailyBucketer,
    /// Hour-of-day bucketer.
    diurnal: DiurnalBucketer,
    /// NowCast estimator.
    nowcast: NowCastEstimator,
}

impl StatsEngine {
    /// Create a new engine from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            stats: config.stats.clone(),
            daily: DailyBucketer::new(config.stats.digits),
            diurnal: DiurnalBucketer::new(config.stats.digits, config.stats.diurnal_day_count),
            nowcast: NowCastEstimator::new(config.nowcast.clone()),
        }
    }

    fn check(&self, series: &HourlySeries) -> Result<()> {
        validate_shape(series.instants(), series.values())?;
        if self.stats.validate_spacing {
            validate_hourly_spacing(series.instants())?;
        }
        Ok(())
    }

    fn trimmed<Z: LocalHourSource>(&self, series: &HourlySeries, zone: Z) -> Result<HourlySeries> {
        self.check(series)?;
        Ok(TimeZoneBoundaryTrimmer::new(zone).trim(series))
    }

    /// Trim `series` to whole days in the named IANA timezone.
    pub fn trim_to_local_days(&self, series: &HourlySeries, timezone: &str) -> Result<HourlySeries> {
        self.trimmed(series, parse_timezone(timezone)?)
    }

    /// Trim `series` to whole days using any local-hour source.
    pub fn trim_to_local_days_in<Z: LocalHourSource>(
        &self,
        series: &HourlySeries,
        zone: Z,
    ) -> Result<HourlySeries> {
        self.trimmed(series, zone)
    }

    /// Null-aware statistics for each whole local day.
    pub fn daily_stats(&self, series: &HourlySeries, timezone: &str) -> Result<DailyStats> {
        self.daily_stats_in(series, parse_timezone(timezone)?)
    }

    pub fn daily_stats_in<Z: LocalHourSource>(
        &self,
        series: &HourlySeries,
        zone: Z,
    ) -> Result<DailyStats> {
        let trimmed = self.trimmed(series, zone)?;
        Ok(self.daily.stats(&trimmed))
    }

    /// Raw average for each whole local day; a gap makes the day missing.
    pub fn daily_average(&self, series: &HourlySeries, timezone: &str) -> Result<DailyAverage> {
        self.daily_average_in(series, parse_timezone(timezone)?)
    }

    pub fn daily_average_in<Z: LocalHourSource>(
        &self,
        series: &HourlySeries,
        zone: Z,
    ) -> Result<DailyAverage> {
        let trimmed = self.trimmed(series, zone)?;
        Ok(self.daily.average(&trimmed))
    }

    /// Null-aware statistics per local hour over the most recent `day_count`
    /// days (configured default when `None`).
    pub fn diurnal_stats(
        &self,
        series: &HourlySeries,
        timezone: &str,
        day_count: Option<usize>,
    ) -> Result<DiurnalStats> {
        self.diurnal_stats_in(series, parse_timezone(timezone)?, day_count)
    }

    pub fn diurnal_stats_in<Z: LocalHourSource>(
        &self,
        series: &HourlySeries,
        zone: Z,
        day_count: Option<usize>,
    ) -> Result<DiurnalStats> {
        let trimmed = self.trimmed(series, zone)?;
        let days = day_count.unwrap_or(self.diurnal.day_count());
        Ok(self.diurnal.stats_for_days(&trimmed, days))
    }

    /// Raw average per local hour over the most recent `day_count` days.
    pub fn diurnal_average(
        &self,
        series: &HourlySeries,
        timezone: &str,
        day_count: Option<usize>,
    ) -> Result<DiurnalAverage> {
        self.diurnal_average_in(series, parse_timezone(timezone)?, day_count)
    }

    pub fn diurnal_average_in<Z: LocalHourSource>(
        &self,
        series: &HourlySeries,
        zone: Z,
        day_count: Option<usize>,
    ) -> Result<DiurnalAverage> {
        let trimmed = self.trimmed(series, zone)?;
        let days = day_count.unwrap_or(self.diurnal.day_count());
        Ok(self.diurnal.average_for_days(&trimmed, days))
    }

    /// NowCast estimate for every hour of a chronological sequence.
    pub fn now_cast(&self, values: &[Reading]) -> Vec<Reading> {
        self.nowcast.series(values)
    }

    /// NowCast estimates for a series, checking its spacing first.
    pub fn now_cast_series(&self, series: &HourlySeries) -> Result<Vec<Reading>> {
        self.check(series)?;
        Ok(self.nowcast.series(series.values()))
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
