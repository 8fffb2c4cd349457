//! Service window times.
//!
//! Routes carry a first and last departure as wall-clock "HH:MM" times.
//! These are displayed alongside itineraries but never take part in the
//! travel-time arithmetic, so they carry no date.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day with minute precision.
///
/// # Examples
///
/// ```
/// use bus_server::domain::ServiceTime;
///
/// let time = ServiceTime::parse_hhmm("06:00").unwrap();
/// assert_eq!(time.to_string(), "06:00");
///
/// assert!(ServiceTime::parse_hhmm("6:00").is_err());
/// assert!(ServiceTime::parse_hhmm("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceTime(NaiveTime);

impl ServiceTime {
    /// Create a time from hour and minute, if both are in range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ServiceTime)
    }

    /// Parse a time from "HH:MM" format.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Debug for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// A route's first and last departure of the day.
///
/// By convention `first <= last`, but this is not enforced: a night route
/// may legitimately start late and finish early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWindow {
    pub first: ServiceTime,
    pub last: ServiceTime,
}

impl ServiceWindow {
    /// Default first departure: 06:00.
    pub fn default_first() -> ServiceTime {
        ServiceTime(NaiveTime::from_hms_opt(6, 0, 0).unwrap_or_default())
    }

    /// Default last departure: 22:30.
    pub fn default_last() -> ServiceTime {
        ServiceTime(NaiveTime::from_hms_opt(22, 30, 0).unwrap_or_default())
    }

    /// Create a window from first and last departures.
    pub fn new(first: ServiceTime, last: ServiceTime) -> Self {
        Self { first, last }
    }

    /// Build a window from optional "HH:MM" strings.
    ///
    /// Each side that is absent or unparsable falls back to its default.
    pub fn from_hhmm_lenient(first: Option<&str>, last: Option<&str>) -> Self {
        let first = first
            .and_then(|s| ServiceTime::parse_hhmm(s.trim()).ok())
            .unwrap_or_else(Self::default_first);
        let last = last
            .and_then(|s| ServiceTime::parse_hhmm(s.trim()).ok())
            .unwrap_or_else(Self::default_last);
        Self { first, last }
    }
}

impl Default for ServiceWindow {
    fn default() -> Self {
        Self {
            first: Self::default_first(),
            last: Self::default_last(),
        }
    }
}

impl fmt::Display for ServiceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.first, self.last)
    }
}
