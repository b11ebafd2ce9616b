//! Rule for consistency between the declared and the measured existing time scale.

use crate::validation::event::ValidationEvent;
use crate::validation::validator::ScaleContext;

/// "The Paperwork Rule": a declared existing time scale must match what the data says.
///
/// Two instantaneous scales that differ only in detail are tolerated with a
/// warning, since the system treats every instantaneous scale alike.
pub(crate) fn validate_declaration(ctx: &ScaleContext<'_>) -> Option<ValidationEvent> {
    let declared = ctx.declared_existing?;
    if declared == ctx.existing {
        return None;
    }

    if declared.is_instantaneous() && ctx.existing.is_instantaneous() {
        return Some(ValidationEvent::warn(ctx.message(format_args!(
            "The existing time scale in the project declaration is {} and the existing time scale associated \
             with the data is {}. This discrepancy is allowed because both are recognized by the system as \
             'INSTANTANEOUS'.",
            declared.detailed(),
            ctx.existing.detailed()
        ))));
    }

    Some(ValidationEvent::error(ctx.message(format_args!(
        "The existing time scale in the project declaration is {declared} and the existing time scale \
         associated with the data is {}. This inconsistency is not allowed. Fix the declaration of the source.",
        ctx.existing
    ))))
}
