//! Local hour-of-day lookup.
//!
//! The trimmer and bucketers only ever need to know which local hour a UTC
//! instant falls on; everything else about timezones stays behind this trait.

use airq_core::{Error, Result, Timestamp};
use chrono::{FixedOffset, Timelike};
use chrono_tz::Tz;

/// Maps a UTC instant to its local hour of day in `0..24`.
pub trait LocalHourSource {
    fn local_hour(&self, instant: Timestamp) -> u32;
}

impl LocalHourSource for Tz {
    fn local_hour(&self, instant: Timestamp) -> u32 {
        instant.with_timezone(self).hour()
    }
}

impl LocalHourSource for FixedOffset {
    fn local_hour(&self, instant: Timestamp) -> u32 {
        instant.with_timezone(self).hour()
    }
}

impl<T: LocalHourSource + ?Sized> LocalHourSource for &T {
    fn local_hour(&self, instant: Timestamp) -> u32 {
        (**self).local_hour(instant)
    }
}

/// Look up an IANA timezone by name, e.g. `"America/Chicago"`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::unknown_timezone(name))
}
