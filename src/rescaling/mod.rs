//! Reconciliation of several time scales into a single common scale.
pub mod error;
pub mod least_common;

pub use error::{ArithmeticError, RescalingError};
pub use least_common::{least_common_duration, least_common_time_scale};
