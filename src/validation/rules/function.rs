//! Rules on the function attached to the desired time scale.
//!
//! Accumulations are the delicate case: summing values that are not themselves
//! totals (or are point readings) yields a number with the wrong meaning and,
//! usually, the wrong units.

use crate::scale::ScaleFunction;
use crate::validation::event::ValidationEvent;
use crate::validation::validator::ScaleContext;

pub(crate) fn desired_function_is_unknown(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    (ctx.desired.function() == ScaleFunction::Unknown).then(|| {
        ValidationEvent::error(ctx.message(format_args!(
            "The desired time scale function is '{}': the function must be known to conduct rescaling.",
            ScaleFunction::Unknown
        )))
    })
}

// Accumulating point readings would need a time integral and a change of units.
pub(crate) fn accumulating_instantaneous(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    (ctx.desired.function() == ScaleFunction::Total && ctx.existing.is_instantaneous()).then(|| {
        ValidationEvent::error(ctx.message(format_args!(
            "Cannot accumulate instantaneous values. Change the existing time scale or change the function \
             associated with the desired time scale to something other than a '{}'.",
            ScaleFunction::Total
        )))
    })
}

/// Only totals can be accumulated. An unknown existing function is assumed to
/// be a total, with a warning.
pub(crate) fn accumulating_non_accumulation(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    let existing = ctx.existing.function();
    if ctx.desired.function() != ScaleFunction::Total
        || existing == ScaleFunction::Total
        || ctx.existing.is_instantaneous()
    {
        return None;
    }

    let total = ScaleFunction::Total;
    if existing == ScaleFunction::Unknown {
        return Some(ValidationEvent::warn(ctx.message(format_args!(
            "The function associated with the desired time scale is a '{total}', but the function associated \
             with the existing time scale of the {} data is '{existing}'. Assuming that the existing function \
             is a '{total}'.",
            ctx.source
        ))));
    }

    Some(ValidationEvent::error(ctx.message(format_args!(
        "Cannot accumulate values that are not already accumulations. The function associated with the \
         existing time scale must be a '{total}', rather than a '{existing}', or the function associated with \
         the desired time scale must be changed."
    ))))
}
