//! Value types describing the temporal scale of a time series.
pub mod duration;
pub mod error;
pub mod function;
pub mod month_day;
pub mod time_scale;

// Re-export key types for convenient access
pub use duration::Duration;
pub use error::{NonPositive, ScaleError};
pub use function::ScaleFunction;
pub use month_day::MonthDay;
pub use time_scale::{DetailedTimeScale, ScaleKind, TimeScale, INSTANTANEOUS_DURATION};
