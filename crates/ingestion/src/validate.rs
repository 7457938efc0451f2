//! Structural validation of hourly series.

use airq_core::{Error, Reading, Result, Timestamp};
use chrono::Duration;

/// Instants and values must pair up one-to-one.
pub fn validate_shape(instants: &[Timestamp], values: &[Reading]) -> Result<()> {
    if instants.len() != values.len() {
        return Err(Error::invalid_shape(format!(
            "{} instants but {} values",
            instants.len(),
            values.len()
        )));
    }
    Ok(())
}

/// Consecutive instants must be exactly one hour apart.
pub fn validate_hourly_spacing(instants: &[Timestamp]) -> Result<()> {
    let hour = Duration::hours(1);
    for (i, pair) in instants.windows(2).enumerate() {
        let step = pair[1] - pair[0];
        if step != hour {
            return Err(Error::invalid_shape(format!(
                "instants {} and {} are {}s apart, expected 3600s",
                i,
                i + 1,
                step.num_seconds()
            )));
        }
    }
    Ok(())
}
