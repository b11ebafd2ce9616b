//! Failures of the least-common-scale calculator and of rescaling policy checks.
use crate::scale::{Duration, ScaleFunction};
use thiserror::Error;

/// The arithmetic condition underneath a failed least common duration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("overflow while computing the least common multiple of '{left}' and '{right}'")]
    Overflow { left: Duration, right: Duration },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RescalingError {
    /// Names the quantity that could not be computed, e.g. "Least Common Scale".
    #[error("Cannot compute the {0} from empty input.")]
    EmptyInput(&'static str),
    #[error("When computing the Least Common Duration, found a non-positive duration of '{0}', which is not allowed.")]
    NonPositiveDuration(Duration),
    #[error(
        "Could not determine the Least Common Scale from the input. Expected input with only one scale function \
         that does not correspond to an instantaneous time scale. Instead found [{}].",
        list_functions(.0)
    )]
    AmbiguousFunction(Vec<ScaleFunction>),
    #[error("While attempting to compute the Least Common Duration from the input: {0}")]
    Arithmetic(#[from] ArithmeticError),
    #[error("Encountered {count} errors while validating the rescaling of {context}:{details}")]
    Invalid { count: usize, context: String, details: String },
}

fn list_functions(functions: &[ScaleFunction]) -> String {
    functions.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
}
