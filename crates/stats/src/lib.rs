//! Summary statistics for hourly air-quality series.
//!
//! This crate handles:
//! - Null-aware reducers (count, sum, mean, min, max) and output rounding
//! - Daily statistics over whole local days
//! - Diurnal (hour-of-day) statistics over the most recent days
//! - The NowCast recency-weighted estimate
//!
//! ```
//! use airq_stats::{daily_stats, now_cast};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2023, 2, 14, 0, 0, 0).unwrap();
//! let instants: Vec<_> = (0..48).map(|i| start + Duration::hours(i)).collect();
//! let values = vec![Some(12.0); 48];
//!
//! let daily = daily_stats(&instants, &values, "UTC").unwrap();
//! assert_eq!(daily.mean, vec![Some(12.0), Some(12.0)]);
//!
//! let estimates = now_cast(&values);
//! assert_eq!(estimates.len(), 48);
//! ```

pub mod aggregator;
pub mod api;
pub mod daily;
pub mod diurnal;
pub mod engine;
pub mod nowcast;

pub use aggregator::NullAwareAggregator;
pub use api::{daily_average, daily_stats, diurnal_average, diurnal_stats, trim_to_local_days};
pub use daily::DailyBucketer;
pub use diurnal::DiurnalBucketer;
pub use engine::StatsEngine;
pub use nowcast::{now_cast, NowCastEstimator, NowCastWindow};
