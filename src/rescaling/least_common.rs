//! Reconciles several time scales into one that all of them can be rescaled to.
//!
//! The least common scale (LCS) is built from the least common multiple of the
//! input periods. Arithmetic is exact at nanosecond resolution in 128-bit
//! integers, with every multiplication checked; an LCM that does not fit a
//! [`Duration`] is reported as an [`ArithmeticError`] rather than wrapped.

use super::error::{ArithmeticError, RescalingError};
use crate::scale::{Duration, ScaleFunction, TimeScale};
use std::collections::BTreeSet;

/// Computes the least common multiple of the durations.
///
/// The durations are reduced pairwise in ascending order. A single duration is
/// returned unchanged.
///
/// Sub-second durations are neither rejected nor truncated to whole seconds:
/// the multiple is exact at nanosecond resolution, so `0.4s` and `0.6s` give
/// `1.2s`. For whole-second inputs the result is the whole-second LCM.
pub fn least_common_duration(durations: &BTreeSet<Duration>) -> Result<Duration, RescalingError> {
    let mut remaining = durations.iter().copied();
    let first = remaining
        .next()
        .ok_or(RescalingError::EmptyInput("Least Common Duration"))?;

    // Ascending order, so the first duration is the only one that needs checking.
    if first.is_zero() || first.is_negative() {
        return Err(RescalingError::NonPositiveDuration(first));
    }

    if durations.len() == 1 {
        tracing::debug!("When computing the Least Common Duration, found only one duration in the input.");
        return Ok(first);
    }

    remaining.try_fold(first, |acc, next| Ok(lcm(acc, next)?))
}

/// Computes the least common scale of the inputs.
///
/// An instantaneous scale is compatible with any other, so a pair made of one
/// instantaneous and one non-instantaneous scale resolves to the latter as-is.
/// Otherwise the non-instantaneous members must agree on a single function.
pub fn least_common_time_scale(scales: &BTreeSet<TimeScale>) -> Result<TimeScale, RescalingError> {
    let first = *scales
        .first()
        .ok_or(RescalingError::EmptyInput("Least Common Scale"))?;

    if scales.len() == 1 {
        tracing::debug!("When computing the Least Common Scale, found only one time scale in the input.");
        return Ok(first);
    }

    if scales.len() == 2 {
        let mut pair = scales.iter();
        if let (Some(&a), Some(&b)) = (pair.next(), pair.next()) {
            match (a.is_instantaneous(), b.is_instantaneous()) {
                (true, false) => return Ok(b),
                (false, true) => return Ok(a),
                _ => {}
            }
        }
    }

    let functions: BTreeSet<ScaleFunction> = scales
        .iter()
        .filter(|scale| !scale.is_instantaneous())
        .map(TimeScale::function)
        .collect();

    if functions.len() > 1 {
        return Err(RescalingError::AmbiguousFunction(functions.into_iter().collect()));
    }

    let periods: BTreeSet<Duration> = scales.iter().map(TimeScale::effective_period).collect();
    let period = least_common_duration(&periods)?;
    let function = functions.first().copied().unwrap_or_default();

    tracing::debug!(%period, %function, inputs = scales.len(), "computed the Least Common Scale");

    Ok(TimeScale::of_positive(period, function))
}

/// `a / gcd(a, b) * b`, both inputs positive.
fn lcm(left: Duration, right: Duration) -> Result<Duration, ArithmeticError> {
    let overflow = || ArithmeticError::Overflow { left, right };
    let (a, b) = (left.as_nanos(), right.as_nanos());
    let multiple = (a / gcd(a, b)).checked_mul(b).ok_or_else(overflow)?;
    Duration::try_from_nanos(multiple).ok_or_else(overflow)
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
