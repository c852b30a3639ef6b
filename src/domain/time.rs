//! Calendar date and time-of-day value types.
//!
//! Both are plain `Copy` records. No calendar validation is performed: a date
//! is whatever three integers it was built from.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed width of a `DD/MM/YYYY` token
pub const DATE_LENGTH: usize = 10;

/// Fixed width of a `HH:MM` token
pub const TIME_LENGTH: usize = 5;

/// Errors produced when reading a date or time token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemporalParseError {
    #[error("Token '{value}' has length {actual}, expected {expected}")]
    Length {
        value: String,
        expected: usize,
        actual: usize,
    },

    #[error("Token '{value}' does not match {format}")]
    Format { value: String, format: &'static str },
}

/// A calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl Date {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = TemporalParseError;

    /// Parse a `DD/MM/YYYY` token
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_length(s, DATE_LENGTH)?;

        let format_error = || TemporalParseError::Format {
            value: s.to_string(),
            format: "DD/MM/YYYY",
        };

        let mut parts = s.split('/');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format_error());
        };

        Ok(Self {
            day: day.parse().map_err(|_| format_error())?,
            month: month.parse().map_err(|_| format_error())?,
            year: year.parse().map_err(|_| format_error())?,
        })
    }
}

/// A duration expressed as hours and minutes.
///
/// Construction keeps the fields as given; minutes are only carried into
/// hours when two values are added together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minutes: u32,
}

impl TimeOfDay {
    pub const ZERO: TimeOfDay = TimeOfDay { hour: 0, minutes: 0 };

    pub fn new(hour: u32, minutes: u32) -> Self {
        Self { hour, minutes }
    }
}

impl AddAssign for TimeOfDay {
    fn add_assign(&mut self, rhs: Self) {
        self.hour += rhs.hour;
        self.minutes += rhs.minutes;
        if self.minutes >= 60 {
            self.hour += self.minutes / 60;
            self.minutes %= 60;
        }
    }
}

impl Add for TimeOfDay {
    type Output = TimeOfDay;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minutes)
    }
}

impl FromStr for TimeOfDay {
    type Err = TemporalParseError;

    /// Parse a `HH:MM` token
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_length(s, TIME_LENGTH)?;

        let format_error = || TemporalParseError::Format {
            value: s.to_string(),
            format: "HH:MM",
        };

        let (hour, minutes) = s.split_once(':').ok_or_else(format_error)?;

        Ok(Self {
            hour: hour.parse().map_err(|_| format_error())?,
            minutes: minutes.parse().map_err(|_| format_error())?,
        })
    }
}

fn check_length(s: &str, expected: usize) -> Result<(), TemporalParseError> {
    if s.len() != expected {
        return Err(TemporalParseError::Length {
            value: s.to_string(),
            expected,
            actual: s.len(),
        });
    }
    Ok(())
}
