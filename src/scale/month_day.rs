//! Calendar month-days bounding a seasonal time scale.

use super::error::ScaleError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Month-days are checked against a leap year, so `--02-29` is a valid bound.
pub(crate) const REFERENCE_YEAR: i32 = 2020;
pub(crate) const DAYS_IN_REFERENCE_YEAR: u32 = 366;

/// A day of the year without a year, e.g. `--04-01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Result<Self, ScaleError> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day)
            .map(|_| Self { month, day })
            .ok_or(ScaleError::InvalidMonthDay { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// One-based position of this month-day within the leap reference year.
    pub(crate) fn ordinal(&self) -> u32 {
        // Validated on construction.
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, self.month, self.day)
            .map_or(1, |date| date.ordinal())
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ScaleError::MalformedMonthDay(s.to_string());
        let body = s.trim().strip_prefix("--").ok_or_else(malformed)?;
        let (month, day) = body.split_once('-').ok_or_else(malformed)?;
        if month.len() != 2 || day.len() != 2 {
            return Err(malformed());
        }
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        let day = day.parse::<u32>().map_err(|_| malformed())?;
        Self::new(month, day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = ScaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}
