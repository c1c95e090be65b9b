//! Timestamps in the OCEL wire format
//!
//! Internally a [`Timestamp`] keeps full microsecond precision so that
//! fractional step durations accumulate exactly; the wire form
//! (`YYYY-MM-DDTHH:MM:SSZ`) truncates to whole seconds.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{Error, Result};

/// Wire format for every timestamp in an output document
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A UTC instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Build from calendar fields (UTC)
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Result<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Timestamp)
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "invalid calendar time {:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                    year, month, day, hour, min, sec
                ))
            })
    }

    /// Parse the wire format, or any RFC 3339 string
    pub fn parse(s: &str) -> Result<Self> {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, WIRE_FORMAT) {
            return Ok(Timestamp(naive.and_utc()));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Timestamp(dt.with_timezone(&Utc)))
            .map_err(|e| Error::InvalidConfig(format!("invalid timestamp {:?}: {}", s, e)))
    }

    /// The underlying chrono value
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Shift by a (possibly fractional) number of minutes
    ///
    /// Sub-microsecond remainders are rounded. Fails with `InvalidConfig`
    /// if the result leaves the representable range.
    pub fn plus_minutes(self, minutes: f64) -> Result<Self> {
        let micros = (minutes * 60_000_000.0).round() as i64;
        self.checked_add(Duration::microseconds(micros))
            .ok_or_else(|| out_of_range(self, &format!("{} minutes", minutes)))
    }

    /// Shift by a whole number of hours
    pub fn plus_hours(self, hours: i64) -> Result<Self> {
        Duration::try_hours(hours)
            .and_then(|d| self.checked_add(d))
            .ok_or_else(|| out_of_range(self, &format!("{} hours", hours)))
    }

    fn checked_add(self, delta: Duration) -> Option<Self> {
        self.0.checked_add_signed(delta).map(Timestamp)
    }
}

fn out_of_range(from: Timestamp, shift: &str) -> Error {
    Error::InvalidConfig(format!("timestamp out of range: {} + {}", from, shift))
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse(&s).map_err(serde::de::Error::custom)
    }
}
