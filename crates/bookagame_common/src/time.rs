// --- File: crates/bookagame_common/src/time.rs ---
//! Wall-clock time of day as exchanged with the API (`"09:00"`).

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::BookingError;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision.
///
/// Parses `HH:MM` and `HH:MM:SS` (seconds are dropped) and always renders as
/// zero-padded `HH:MM`, so ordering by value equals ordering by the string
/// the API sends. `24:00` is read as midnight; as an end time it closes the
/// day (see [`ClockTime::minutes_until`]).
/// Defaults to midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// Minutes since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Minutes from `self` to `end`. An `end` before `self` lies on the next
    /// day, so a 23:00 slot ending at 00:00 lasts 60 minutes.
    pub fn minutes_until(&self, end: ClockTime) -> u32 {
        let start = self.minutes_since_midnight();
        let end = end.minutes_since_midnight();
        if end < start {
            end + MINUTES_PER_DAY - start
        } else {
            end - start
        }
    }

    /// Adds whole hours, returning `None` past midnight.
    pub fn add_hours(&self, hours: u32) -> Option<Self> {
        let total = self.minutes_since_midnight() + hours * 60;
        if total >= MINUTES_PER_DAY {
            return None;
        }
        ClockTime::new(total / 60, total % 60)
    }

    /// `9:00 AM`, `12:30 PM`, `12:00 AM` for midnight.
    pub fn to_12h_string(&self) -> String {
        let hour = self.hour();
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour12, self.minute(), suffix)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "24:00" || s == "24:00:00" {
            return Ok(ClockTime::default());
        }
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map(ClockTime::from)
            .map_err(|_| BookingError::Parse(format!("invalid time of day: {:?}", s)))
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(t: NaiveTime) -> Self {
        ClockTime::new(t.hour(), t.minute()).unwrap_or(ClockTime(t))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
