//! Rules relating the time-step of the data to the desired time scale.
//!
//! Rescaling aggregates consecutive raw values, so the raw values must arrive
//! more often than the desired period and must tile it exactly.

use crate::validation::event::ValidationEvent;
use crate::validation::validator::ScaleContext;

pub(crate) fn time_step_is_zero(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    ctx.time_step.is_zero().then(|| {
        ValidationEvent::error(ctx.message("The period associated with the time-step cannot be zero."))
    })
}

pub(crate) fn time_step_is_negative(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    ctx.time_step.is_negative().then(|| {
        ValidationEvent::error(ctx.message("The period associated with the time-step cannot be negative."))
    })
}

pub(crate) fn time_step_exceeds_desired_period(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    let desired = ctx.desired_period();
    (ctx.time_step > desired).then(|| {
        ValidationEvent::error(ctx.message(format_args!(
            "Insufficient data for rescaling: The time-step of the data is '{}' and the period associated with \
             the desired time scale is '{desired}'. The time-step of the data cannot be greater than the desired \
             time scale when rescaling is required.",
            ctx.time_step
        )))
    })
}

pub(crate) fn time_step_matches_desired_period(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    (ctx.time_step == ctx.desired_period()).then(|| {
        ValidationEvent::error(ctx.message(format_args!(
            "Insufficient data for rescaling: the period associated with the desired time scale matches the \
             time-step of the data ({}).",
            ctx.time_step
        )))
    })
}

/// A zero time-step never divides the desired period.
pub(crate) fn desired_period_is_multiple_of_time_step(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    let desired = ctx.desired_period();
    (!desired.is_multiple_of(ctx.time_step)).then(|| {
        ValidationEvent::error(ctx.message(format_args!(
            "The desired period of '{desired}' is not an integer multiple of the data time-step, which is '{}'. \
             If the data has multiple time-steps that vary by time or feature, it may not be possible to achieve \
             the desired time scale for all of the data. In that case, consider removing the desired time scale \
             and performing an evaluation at the existing time scale of the data, where possible.",
            ctx.time_step
        )))
    })
}
