//! Construction-time invariant violations for time scale values.
use std::fmt;
use thiserror::Error;

/// Which way a period failed to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonPositive {
    Zero,
    Negative,
}

impl fmt::Display for NonPositive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonPositive::Zero => f.write_str("period of zero"),
            NonPositive::Negative => f.write_str("negative period"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("Cannot build a time scale with a {0}.")]
    NonPositivePeriod(NonPositive),
    #[error("Invalid month-day: month {month}, day {day} does not exist in the calendar.")]
    InvalidMonthDay { month: u32, day: u32 },
    #[error("Malformed month-day '{0}': expected the form --MM-DD.")]
    MalformedMonthDay(String),
    #[error("Unrecognized time scale function '{0}'.")]
    UnknownFunction(String),
    #[error("The {0} cannot be missing.")]
    MissingArgument(&'static str),
}
