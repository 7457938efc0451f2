//! Series ingestion and alignment for the air-quality algorithms.
//!
//! This crate handles:
//! - Shape and hourly-spacing validation
//! - Missing-value normalization of raw readings
//! - Local hour-of-day lookup (the timezone collaborator)
//! - Trimming a series to whole local days

pub mod normalize;
pub mod timezone;
pub mod trimmer;
pub mod validate;

pub use normalize::{normalize_reading, normalize_readings, readings_from_raw};
pub use timezone::{parse_timezone, LocalHourSource};
pub use trimmer::{trim_to_local_days, TimeZoneBoundaryTrimmer};
pub use validate::{validate_hourly_spacing, validate_shape};
