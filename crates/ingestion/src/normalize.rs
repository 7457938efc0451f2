//! Missing-value normalization.
//!
//! Absent values, explicit nulls and non-finite numbers all collapse to `None`
//! before any arithmetic touches them.

use airq_core::Reading;

/// Collapse a non-finite reading into the missing marker.
#[inline]
pub fn normalize_reading(value: Reading) -> Reading {
    value.filter(|v| v.is_finite())
}

/// Normalize every reading in a slice.
pub fn normalize_readings(values: &[Reading]) -> Vec<Reading> {
    values.iter().map(|&v| normalize_reading(v)).collect()
}

/// Convert raw floats, where NaN marks a gap, into readings.
pub fn readings_from_raw(values: &[f64]) -> Vec<Reading> {
    values.iter().map(|&v| normalize_reading(Some(v))).collect()
}
