//! The aggregation function attached to a time scale.

use super::error::ScaleError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How a value summarises the interval described by its time scale.
///
/// The ordinal is load-bearing: it breaks ties when ordering time scales and fixes
/// the order in which functions are listed in error messages. It is pinned
/// explicitly in [`ScaleFunction::ordinal`] rather than left to declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleFunction {
    /// The function was not reported by the source or the declaration.
    #[default]
    Unknown,
    Mean,
    Minimum,
    Maximum,
    /// An accumulation over the period.
    Total,
}

impl ScaleFunction {
    /// Every function, in ordinal order.
    pub const ALL: [ScaleFunction; 5] = [
        ScaleFunction::Unknown,
        ScaleFunction::Mean,
        ScaleFunction::Minimum,
        ScaleFunction::Maximum,
        ScaleFunction::Total,
    ];

    pub const fn ordinal(self) -> u8 {
        match self {
            ScaleFunction::Unknown => 0,
            ScaleFunction::Mean => 1,
            ScaleFunction::Minimum => 2,
            ScaleFunction::Maximum => 3,
            ScaleFunction::Total => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ScaleFunction::Unknown => "UNKNOWN",
            ScaleFunction::Mean => "MEAN",
            ScaleFunction::Minimum => "MINIMUM",
            ScaleFunction::Maximum => "MAXIMUM",
            ScaleFunction::Total => "TOTAL",
        }
    }
}

impl PartialOrd for ScaleFunction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScaleFunction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for ScaleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, so declarations may say `mean` or `MEAN`.
impl FromStr for ScaleFunction {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ScaleError::UnknownFunction(s.to_string()))
    }
}
