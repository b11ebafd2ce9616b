//! Reconciliation of the temporal scales of time series.
//!
//! A time series has a scale: the period each value covers and the function
//! that produced it (a mean, a total, ...). Before two series can be compared
//! they must share a scale. This crate finds the least common scale of a set of
//! sources and validates whether each source can be rescaled to it, producing
//! diagnostics for the rescaling executor to act on.

pub mod rescaling;
pub mod scale;
pub mod validation;

#[cfg(feature = "python")]
mod bindings;

pub use rescaling::{least_common_duration, least_common_time_scale, RescalingError};
pub use scale::{Duration, MonthDay, ScaleError, ScaleFunction, TimeScale};
pub use validation::{
    check_for_errors, has_event, is_change_of_scale_required, validate, ScaleValidator, Severity,
    ValidationEvent, ValidationOptions,
};
