//! Canonical temporal values.
//!
//! Three small value structs with explicit conversions between them:
//! * [`DateValue`] – a calendar date (`year`, `month`, `day`).
//! * [`TimeValue`] – a time of day with nanosecond precision.
//! * [`DateTimeValue`] – a date paired with a time.
//!
//! Field order is the comparison order, so the derived `Ord` implementations
//! give the lexicographic total order (year, month, day / hour, minute,
//! second, nanosecond / date then time).

// used to validate calendar days (leap years included)
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
// used to print out the canonical textual forms
use std::fmt;

use thiserror::Error;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("{hour:02}:{minute:02}:{second:02}.{nanosecond:09} is not a valid time")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    },
}

// ------------- Date -------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue {
    year: i32,
    month: u32,
    day: u32,
}

impl DateValue {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TemporalError> {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(_) => Ok(Self { year, month, day }),
            None => Err(TemporalError::InvalidDate { year, month, day }),
        }
    }
    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn day(&self) -> u32 {
        self.day
    }
    /// Widens the date to a date-time at midnight.
    pub fn to_date_time(self) -> DateTimeValue {
        DateTimeValue::new(self, TimeValue::MIDNIGHT)
    }
}
impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}
impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        } else {
            write!(f, "{:+05}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

// ------------- Time -------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue {
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
}

impl TimeValue {
    pub const MIDNIGHT: TimeValue = TimeValue {
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
    };

    pub fn new(hour: u32, minute: u32, second: u32, nanosecond: u32) -> Result<Self, TemporalError> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond >= NANOS_PER_SECOND {
            return Err(TemporalError::InvalidTime {
                hour,
                minute,
                second,
                nanosecond,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }
    pub fn hour(&self) -> u32 {
        self.hour
    }
    pub fn minute(&self) -> u32 {
        self.minute
    }
    pub fn second(&self) -> u32 {
        self.second
    }
    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }
    pub fn is_midnight(&self) -> bool {
        *self == Self::MIDNIGHT
    }
}
impl From<NaiveTime> for TimeValue {
    // chrono encodes a leap second as nanosecond >= 10^9, which is folded
    // into the last representable instant of that second
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            nanosecond: t.nanosecond().min(NANOS_PER_SECOND - 1),
        }
    }
}
impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:09}",
            self.hour, self.minute, self.second, self.nanosecond
        )
    }
}

// ------------- Date and time -------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeValue {
    date: DateValue,
    time: TimeValue,
}

impl DateTimeValue {
    pub fn new(date: DateValue, time: TimeValue) -> Self {
        Self { date, time }
    }
    /// Builds a date-time from its seven fields, validating all of them.
    pub fn of(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    ) -> Result<Self, TemporalError> {
        Ok(Self {
            date: DateValue::new(year, month, day)?,
            time: TimeValue::new(hour, minute, second, nanosecond)?,
        })
    }
    pub fn date(&self) -> DateValue {
        self.date
    }
    pub fn time(&self) -> TimeValue {
        self.time
    }
    pub fn is_midnight(&self) -> bool {
        self.time.is_midnight()
    }
    /// Drops the time component.
    pub fn truncate(self) -> DateValue {
        self.date
    }
}
impl From<DateValue> for DateTimeValue {
    fn from(d: DateValue) -> Self {
        d.to_date_time()
    }
}
impl From<NaiveDateTime> for DateTimeValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            date: DateValue::from(dt.date()),
            time: TimeValue::from(dt.time()),
        }
    }
}
impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}
