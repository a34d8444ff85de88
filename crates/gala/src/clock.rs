//! Calendar timestamps for events and notifications.
//!
//! The directory only cares about minute precision, so a [`Timestamp`]
//! carries the five calendar fields rather than a full instant. Rendering
//! is fixed-width `YYYY-MM-DD HH:MM`.

use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

/// A point in time with minute precision.
///
/// Field values are stored as given; no calendar validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// Calendar year.
    pub year: i32,
    /// Month of year (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// Hour of day (0-23).
    pub hour: u32,
    /// Minute of hour (0-59).
    pub minute: u32,
}

impl Timestamp {
    /// Create a timestamp from explicit calendar fields.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// The current local time, truncated to the minute.
    #[must_use]
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
