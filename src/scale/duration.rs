//! A signed, nanosecond-precise duration.
//!
//! Time-steps reported by readers can be zero or negative, and time scale periods
//! can be as long as `i64::MAX` seconds, so neither `std::time::Duration` nor
//! `chrono::TimeDelta` covers the full range this crate has to reason about.

use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_SECOND_WIDE: i128 = NANOS_PER_SECOND as i128;

/// A length of time held as whole seconds plus a non-negative nanosecond adjustment.
///
/// The representation is normalised (`nanos < 1_000_000_000`), so the derived
/// ordering, equality and hashing all agree with the numeric value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "RawDuration")]
pub struct Duration {
    seconds: i64,
    nanos: u32,
}

#[derive(Deserialize)]
struct RawDuration {
    seconds: i64,
    #[serde(default)]
    nanos: u32,
}

impl TryFrom<RawDuration> for Duration {
    type Error = String;

    fn try_from(raw: RawDuration) -> Result<Self, Self::Error> {
        if raw.nanos >= NANOS_PER_SECOND {
            return Err(format!("nanos must be less than {NANOS_PER_SECOND}, found {}", raw.nanos));
        }
        Ok(Self { seconds: raw.seconds, nanos: raw.nanos })
    }
}

impl Duration {
    pub const ZERO: Duration = Duration { seconds: 0, nanos: 0 };

    /// Builds a duration from seconds and a nanosecond adjustment of either sign.
    ///
    /// # Panics
    /// If the normalised number of seconds overflows an `i64`.
    pub const fn new(seconds: i64, nanos: i64) -> Self {
        let carry = nanos.div_euclid(NANOS_PER_SECOND as i64);
        let nanos = nanos.rem_euclid(NANOS_PER_SECOND as i64) as u32;
        match seconds.checked_add(carry) {
            Some(seconds) => Self { seconds, nanos },
            None => panic!("overflow in Duration::new"),
        }
    }

    pub const fn from_secs(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self {
            seconds: millis.div_euclid(1_000),
            nanos: (millis.rem_euclid(1_000) * 1_000_000) as u32,
        }
    }

    /// # Panics
    /// If the number of seconds overflows an `i64`.
    pub const fn from_mins(minutes: i64) -> Self {
        match minutes.checked_mul(60) {
            Some(seconds) => Self::from_secs(seconds),
            None => panic!("overflow in Duration::from_mins"),
        }
    }

    /// # Panics
    /// If the number of seconds overflows an `i64`.
    pub const fn from_hours(hours: i64) -> Self {
        match hours.checked_mul(3_600) {
            Some(seconds) => Self::from_secs(seconds),
            None => panic!("overflow in Duration::from_hours"),
        }
    }

    /// # Panics
    /// If the number of seconds overflows an `i64`.
    pub const fn from_days(days: i64) -> Self {
        match days.checked_mul(86_400) {
            Some(seconds) => Self::from_secs(seconds),
            None => panic!("overflow in Duration::from_days"),
        }
    }

    /// Like [`Duration::new`], but `None` instead of a panic when the normalised
    /// seconds do not fit an `i64`.
    pub fn checked_new(seconds: i64, nanos: i64) -> Option<Self> {
        Self::try_from_nanos(i128::from(seconds) * NANOS_PER_SECOND_WIDE + i128::from(nanos))
    }

    /// Converts a total number of nanoseconds, or `None` if the seconds do not fit an `i64`.
    pub fn try_from_nanos(total: i128) -> Option<Self> {
        let seconds = i64::try_from(total.div_euclid(NANOS_PER_SECOND_WIDE)).ok()?;
        let nanos = total.rem_euclid(NANOS_PER_SECOND_WIDE) as u32;
        Some(Self { seconds, nanos })
    }

    /// The total length in nanoseconds. Always representable: `|seconds| * 1e9 < 2^94`.
    pub const fn as_nanos(&self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND_WIDE + self.nanos as i128
    }

    /// Whole seconds, rounded towards negative infinity.
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The non-negative nanosecond adjustment to [`Duration::seconds`].
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    pub const fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// True if this duration is an exact integer multiple of `divisor`.
    /// A zero divisor divides nothing.
    pub fn is_multiple_of(&self, divisor: Duration) -> bool {
        if divisor.is_zero() {
            return false;
        }
        self.as_nanos() % divisor.as_nanos() == 0
    }
}

/// ISO-8601, in the `PTnHnMn.nS` form used throughout evaluation messages.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }

        // A negative value with a fraction is split as if rounded towards zero,
        // so every component carries the same sign.
        let borrowed = self.seconds < 0 && self.nanos > 0;
        let total = if borrowed { self.seconds + 1 } else { self.seconds };
        let hours = total / 3_600;
        let minutes = (total % 3_600) / 60;
        let secs = total % 60;

        f.write_str("PT")?;
        if hours != 0 {
            write!(f, "{hours}H")?;
        }
        if minutes != 0 {
            write!(f, "{minutes}M")?;
        }
        if secs == 0 && self.nanos == 0 {
            return Ok(());
        }

        if borrowed && secs == 0 {
            f.write_str("-0")?;
        } else {
            write!(f, "{secs}")?;
        }

        if self.nanos > 0 {
            let fraction = if borrowed { NANOS_PER_SECOND - self.nanos } else { self.nanos };
            let digits = format!("{fraction:09}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }

        f.write_str("S")
    }
}

impl From<chrono::TimeDelta> for Duration {
    fn from(delta: chrono::TimeDelta) -> Self {
        // subsec_nanos carries the sign of the delta. TimeDelta is bounded by
        // i64::MAX milliseconds, so the floored seconds always fit.
        let total = delta.num_seconds() as i128 * NANOS_PER_SECOND_WIDE + delta.subsec_nanos() as i128;
        Self {
            seconds: total.div_euclid(NANOS_PER_SECOND_WIDE) as i64,
            nanos: total.rem_euclid(NANOS_PER_SECOND_WIDE) as u32,
        }
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = std::num::TryFromIntError;

    fn try_from(duration: std::time::Duration) -> Result<Self, Self::Error> {
        Ok(Self {
            seconds: i64::try_from(duration.as_secs())?,
            nanos: duration.subsec_nanos(),
        })
    }
}
