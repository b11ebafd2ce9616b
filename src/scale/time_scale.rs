//! The time scale of a value: a sampling period plus the function that summarised it.
//!
//! A time scale either carries an explicit period or a recurring annual window
//! bounded by two month-days, whose period is inferred. Values "end at" their
//! valid time, so a six-hour mean stamped 12Z covers the six hours up to 12Z.

use super::duration::Duration;
use super::error::{NonPositive, ScaleError};
use super::function::ScaleFunction;
use super::month_day::{MonthDay, DAYS_IN_REFERENCE_YEAR};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Inclusive upper bound on the period of an instantaneous time scale.
pub const INSTANTANEOUS_DURATION: Duration = Duration::from_secs(60);

/// The two shapes a time scale can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    /// A fixed-length sampling or aggregation window.
    Period { period: Duration, function: ScaleFunction },
    /// A recurring annual window, such as a flood season. Both bounds are inclusive.
    Window { start: MonthDay, end: MonthDay, function: ScaleFunction },
}

/// An immutable, validated time scale.
///
/// Equality is exact: period and function (or start, end and function) must all
/// match. The looser relation used when deciding whether two scales need
/// reconciling at all is [`TimeScale::equals_or_instantaneous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ScaleKind", into = "ScaleKind")]
pub struct TimeScale {
    kind: ScaleKind,
}

impl TimeScale {
    /// A time scale with an explicit period.
    pub fn of(period: Duration, function: ScaleFunction) -> Result<Self, ScaleError> {
        if period.is_zero() {
            return Err(ScaleError::NonPositivePeriod(NonPositive::Zero));
        }
        if period.is_negative() {
            return Err(ScaleError::NonPositivePeriod(NonPositive::Negative));
        }
        Ok(Self::of_positive(period, function))
    }

    /// A time scale with an explicit period and an [`ScaleFunction::Unknown`] function.
    pub fn of_period(period: Duration) -> Result<Self, ScaleError> {
        Self::of(period, ScaleFunction::Unknown)
    }

    /// A seasonal time scale spanning `start` to `end`, both inclusive.
    pub fn window(start: MonthDay, end: MonthDay, function: ScaleFunction) -> Self {
        Self { kind: ScaleKind::Window { start, end, function } }
    }

    /// The canonical instantaneous time scale: one millisecond, function unknown.
    pub fn instantaneous() -> Self {
        Self::of_positive(Duration::from_millis(1), ScaleFunction::Unknown)
    }

    /// Caller guarantees `period > 0`.
    pub(crate) fn of_positive(period: Duration, function: ScaleFunction) -> Self {
        debug_assert!(!period.is_zero() && !period.is_negative());
        Self { kind: ScaleKind::Period { period, function } }
    }

    pub fn kind(&self) -> &ScaleKind {
        &self.kind
    }

    pub fn function(&self) -> ScaleFunction {
        match self.kind {
            ScaleKind::Period { function, .. } | ScaleKind::Window { function, .. } => function,
        }
    }

    /// The explicit period, or `None` for a seasonal window.
    pub fn period(&self) -> Option<Duration> {
        match self.kind {
            ScaleKind::Period { period, .. } => Some(period),
            ScaleKind::Window { .. } => None,
        }
    }

    pub fn has_period(&self) -> bool {
        self.period().is_some()
    }

    pub fn start_month_day(&self) -> Option<MonthDay> {
        match self.kind {
            ScaleKind::Window { start, .. } => Some(start),
            ScaleKind::Period { .. } => None,
        }
    }

    pub fn end_month_day(&self) -> Option<MonthDay> {
        match self.kind {
            ScaleKind::Window { end, .. } => Some(end),
            ScaleKind::Period { .. } => None,
        }
    }

    /// The explicit period, else the number of whole days covered by the window.
    ///
    /// Windows are counted inclusively in a leap reference year, which gives the
    /// longest period the window can span. A window whose end precedes its start
    /// wraps into the following year, e.g. `--11-01` to `--01-31` covers 92 days.
    pub fn effective_period(&self) -> Duration {
        match self.kind {
            ScaleKind::Period { period, .. } => period,
            ScaleKind::Window { start, end, .. } => {
                let (first, last) = (start.ordinal(), end.ordinal());
                let days = if last >= first {
                    last - first + 1
                } else {
                    DAYS_IN_REFERENCE_YEAR - first + 1 + last
                };
                tracing::trace!(%start, %end, days, "inferred the period of a seasonal time scale");
                Duration::from_days(i64::from(days))
            }
        }
    }

    /// True if the effective period is at most [`INSTANTANEOUS_DURATION`], whatever the function.
    pub fn is_instantaneous(&self) -> bool {
        self.effective_period() <= INSTANTANEOUS_DURATION
    }

    /// Equal, or both instantaneous.
    pub fn equals_or_instantaneous(&self, other: &TimeScale) -> bool {
        self == other || (self.is_instantaneous() && other.is_instantaneous())
    }

    /// A rendering that keeps the period and function even when the scale is
    /// instantaneous, for messages that must tell two instantaneous scales apart.
    pub fn detailed(&self) -> DetailedTimeScale {
        DetailedTimeScale(*self)
    }

    fn tie_break(&self) -> (u8, Option<MonthDay>, Option<MonthDay>) {
        match self.kind {
            ScaleKind::Period { .. } => (0, None, None),
            ScaleKind::Window { start, end, .. } => (1, Some(start), Some(end)),
        }
    }
}

impl TryFrom<ScaleKind> for TimeScale {
    type Error = ScaleError;

    fn try_from(kind: ScaleKind) -> Result<Self, Self::Error> {
        match kind {
            ScaleKind::Period { period, function } => Self::of(period, function),
            ScaleKind::Window { start, end, function } => Ok(Self::window(start, end, function)),
        }
    }
}

impl From<TimeScale> for ScaleKind {
    fn from(scale: TimeScale) -> Self {
        scale.kind
    }
}

/// Orders by effective period, then by function ordinal. Remaining ties put
/// explicit periods before windows and then compare the window bounds, which
/// keeps the order consistent with equality.
impl Ord for TimeScale {
    fn cmp(&self, other: &Self) -> Ordering {
        self.effective_period()
            .cmp(&other.effective_period())
            .then_with(|| self.function().cmp(&other.function()))
            .then_with(|| self.tie_break().cmp(&other.tie_break()))
    }
}

impl PartialOrd for TimeScale {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_instantaneous() {
            return f.write_str("[INSTANTANEOUS]");
        }
        self.detailed().fmt(f)
    }
}

/// See [`TimeScale::detailed`].
#[derive(Debug, Clone, Copy)]
pub struct DetailedTimeScale(TimeScale);

impl fmt::Display for DetailedTimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.kind {
            ScaleKind::Period { period, function } => write!(f, "[{period},{function}]"),
            ScaleKind::Window { start, end, function } => write!(f, "[{function},{start},{end}]"),
        }
    }
}
