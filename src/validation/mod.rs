//! Validation of a requested change of time scale.
//!
//! The `ScaleValidator` runs a fixed table of rules against one data source
//! and reports every problem it finds as a `ValidationEvent`, before any
//! values are aggregated.

pub use self::event::{check_for_errors, has_event, Severity, ValidationEvent};
pub use self::validator::{is_change_of_scale_required, validate, ScaleValidator, ValidationOptions};

pub mod event;
pub mod validator;
mod rules {
    pub mod consistency;
    pub mod function;
    pub mod period;
    pub mod time_step;
}
