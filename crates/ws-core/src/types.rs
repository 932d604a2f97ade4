//! Entity types with validation.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for entity construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// An interval whose end does not come after its start.
    #[error("{field} must end after it starts, got {start}-{end}")]
    EmptyInterval {
        field: &'static str,
        start: NaiveTime,
        end: NaiveTime,
    },

    /// The hourly rate was negative or not a number.
    #[error("hourly rate must be a non-negative number, got {value}")]
    InvalidRate { value: f64 },

    /// Unknown day-of-week string.
    #[error("invalid day of week: {value}")]
    InvalidDayOfWeek { value: String },
}

fn ensure_interval(
    field: &'static str,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<(), ValidationError> {
    if start < end {
        Ok(())
    } else {
        Err(ValidationError::EmptyInterval { field, start, end })
    }
}

fn ensure_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(())
    }
}

/// Day of the week a class session recurs on.
///
/// The string forms are pinned to the capitalized English names
/// (`Monday` through `Sunday`); the same strings are stored in the
/// database and compared against the weekday derived from a shift date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All seven days in calendar order, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// String representation for display and database storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

impl From<NaiveDate> for DayOfWeek {
    fn from(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DayOfWeek {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidDayOfWeek {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for DayOfWeek {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayOfWeek> for String {
    fn from(day: DayOfWeek) -> Self {
        day.as_str().to_string()
    }
}

/// A recurring class session on a fixed weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: i64,
    pub name: String,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: Option<String>,
}

impl ClassSession {
    /// Creates a class session after validating the name and time interval.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        day_of_week: DayOfWeek,
        start_time: NaiveTime,
        end_time: NaiveTime,
        location: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        ensure_name("class name", &name)?;
        ensure_interval("class session", start_time, end_time)?;
        Ok(Self {
            id,
            name,
            day_of_week,
            start_time,
            end_time,
            location,
        })
    }
}

/// An employer paying a fixed hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    pub id: i64,
    pub name: String,
    pub hourly_rate: f64,
}

impl Employer {
    /// Creates an employer after validating the name and rate.
    ///
    /// The rate must be finite and non-negative.
    pub fn new(id: i64, name: impl Into<String>, hourly_rate: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        ensure_name("employer name", &name)?;
        if !hourly_rate.is_finite() || hourly_rate < 0.0 {
            return Err(ValidationError::InvalidRate { value: hourly_rate });
        }
        Ok(Self {
            id,
            name,
            hourly_rate,
        })
    }
}

/// A single work shift on a calendar date, resolved with its employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub employer: Employer,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
}

impl Shift {
    /// Creates a shift after validating the time interval.
    pub fn new(
        id: i64,
        employer: Employer,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        ensure_interval("shift", start_time, end_time)?;
        Ok(Self {
            id,
            employer,
            date,
            start_time,
            end_time,
            notes,
        })
    }

    /// Worked duration in hours.
    ///
    /// Always positive: `start < end` is validated at construction and both
    /// times fall on the same nominal day.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "durations are far below 2^52 seconds"
    )]
    pub fn duration_hours(&self) -> f64 {
        let seconds = (self.end_time - self.start_time).num_seconds();
        seconds as f64 / 3600.0
    }

    /// The weekday this shift falls on.
    #[must_use]
    pub fn day_of_week(&self) -> DayOfWeek {
        self.date.into()
    }
}
