//! Time-of-day arithmetic for class countdowns and alarm times.
//!
//! Every function takes the current wall-clock instant as an argument instead
//! of reading the clock, so callers decide what "now" is. All values are local
//! naive times; there is no timezone conversion.
//!
//! ## Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use classalarm_core::timing::{alarm_time, countdown, AlarmOffset, ClassTime};
//!
//! let class: ClassTime = "09:00".parse().unwrap();
//! let now = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 0)
//!     .unwrap();
//!
//! assert_eq!(countdown(class, now).to_string(), "1h 0m until class");
//! assert_eq!(alarm_time(class, now, AlarmOffset::default()).to_string(), "08:40");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// A class start time, always on a whole minute.
///
/// Parsed from and displayed as 24-hour `HH:MM`. Defaults to midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassTime(NaiveTime);

impl ClassTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// The class instant on `date`, at zero seconds.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.0)
    }
}

impl FromStr for ClassTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTime {
            value: s.to_string(),
        };
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let is_field = |part: &str| {
            (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_field(h) || m.len() != 2 || !is_field(m) {
            return Err(invalid());
        }
        let hour = h.parse().map_err(|_| invalid())?;
        let minute = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for ClassTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for ClassTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClassTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Lead time before a class at which its alarm is due.
///
/// Restricted to the choices a student could pick for an alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct AlarmOffset(u32);

impl AlarmOffset {
    /// Allowed offsets in minutes.
    pub const CHOICES: [u32; 8] = [5, 10, 15, 20, 30, 60, 120, 180];

    pub const DEFAULT_MINUTES: u32 = 20;

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }
}

impl Default for AlarmOffset {
    fn default() -> Self {
        Self(Self::DEFAULT_MINUTES)
    }
}

impl TryFrom<u32> for AlarmOffset {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        if Self::CHOICES.contains(&minutes) {
            Ok(Self(minutes))
        } else {
            Err(format!(
                "alarm offset must be one of {:?} minutes, got {minutes}",
                Self::CHOICES
            ))
        }
    }
}

impl From<AlarmOffset> for u32 {
    fn from(offset: AlarmOffset) -> Self {
        offset.0
    }
}

/// Time left until a class starts, floored to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Countdown {
    Remaining { hours: u32, minutes: u32 },
    Ended,
}

impl Countdown {
    /// Total whole minutes left, `None` once the class has started.
    pub fn total_minutes(&self) -> Option<u32> {
        match self {
            Countdown::Remaining { hours, minutes } => Some(hours * 60 + minutes),
            Countdown::Ended => None,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Ended => f.write_str("Class has ended"),
            Countdown::Remaining { hours, minutes } if *hours > 0 => {
                write!(f, "{hours}h {minutes}m until class")
            }
            Countdown::Remaining { minutes, .. } => write!(f, "{minutes}m until class"),
        }
    }
}

/// The instant an alarm is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmTime {
    pub at: NaiveDateTime,
    /// Date of the class the alarm belongs to.
    pub class_date: NaiveDate,
}

impl AlarmTime {
    /// True when the offset pushed the alarm onto the day before the class.
    pub fn crosses_midnight(&self) -> bool {
        self.at.date() < self.class_date
    }
}

impl fmt::Display for AlarmTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.at.format("%H:%M"))
    }
}

/// Countdown from `now` to today's class at `time`.
///
/// The class has ended once `now` reaches the class instant.
pub fn countdown(time: ClassTime, now: NaiveDateTime) -> Countdown {
    let diff_ms = (time.on(now.date()) - now).num_milliseconds();
    if diff_ms <= 0 {
        return Countdown::Ended;
    }
    Countdown::Remaining {
        hours: (diff_ms / MS_PER_HOUR) as u32,
        minutes: ((diff_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u32,
    }
}

/// Alarm instant for today's class at `time`: class time minus `offset`.
pub fn alarm_time(time: ClassTime, now: NaiveDateTime, offset: AlarmOffset) -> AlarmTime {
    let class_date = now.date();
    AlarmTime {
        at: time.on(class_date) - offset.duration(),
        class_date,
    }
}

/// Whether today's class at `time` is still ahead of `now`.
pub fn is_upcoming(time: ClassTime, now: NaiveDateTime) -> bool {
    time.on(now.date()) > now
}

/// Whether the class is upcoming and its alarm has not gone off yet.
pub fn alarm_pending(time: ClassTime, now: NaiveDateTime, offset: AlarmOffset) -> bool {
    alarm_time(time, now, offset).at > now && is_upcoming(time, now)
}
