//! Rules relating the existing period to the desired period.

use crate::scale::ScaleFunction;
use crate::validation::event::ValidationEvent;
use crate::validation::validator::ScaleContext;

/// Values can be aggregated upwards only.
pub(crate) fn downscaling_requested(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    let (existing, desired) = (ctx.existing_period(), ctx.desired_period());
    (desired < existing).then(|| {
        ValidationEvent::error(ctx.message(format_args!(
            "Downscaling is not supported: the desired time scale of '{desired}' cannot be smaller than the \
             existing time scale of '{existing}'."
        )))
    })
}

pub(crate) fn desired_period_is_multiple_of_existing(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    (!ctx.desired_period().is_multiple_of(ctx.existing_period())).then(|| {
        ValidationEvent::error(ctx.message("The desired period must be an integer multiple of the existing period."))
    })
}

/// A known function cannot be swapped for another at the same period. An
/// unknown existing function is assumed to be whatever is desired.
pub(crate) fn function_changed_without_period(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    let existing = ctx.existing.function();
    let desired = ctx.desired.function();
    let period = ctx.existing_period();

    if period != ctx.desired_period() || existing == desired || existing == ScaleFunction::Unknown {
        return None;
    }

    Some(ValidationEvent::error(ctx.message(format_args!(
        "The period associated with the existing and desired time scales is '{period}', but the time scale \
         function associated with the existing time scale is '{existing}', which differs from the function \
         associated with the desired time scale, namely '{desired}'. This is not allowed. The function cannot \
         be changed without changing the period."
    ))))
}
