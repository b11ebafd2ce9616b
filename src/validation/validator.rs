//! The validator that runs every rescaling rule for one data source.
use super::event::ValidationEvent;
use super::rules::{consistency, function, period, time_step};
use crate::scale::{Duration, ScaleError, ScaleFunction, TimeScale};
use serde::Deserialize;
use std::fmt;

/// Everything a rule may look at.
pub(crate) struct ScaleContext<'a> {
    pub(crate) declared_existing: Option<TimeScale>,
    pub(crate) existing: TimeScale,
    pub(crate) desired: TimeScale,
    pub(crate) time_step: Duration,
    pub(crate) source: &'a str,
}

impl ScaleContext<'_> {
    /// Prefixes a message with the data source it concerns.
    pub(crate) fn message(&self, body: impl fmt::Display) -> String {
        format!("While validating a {} data source: {body}", self.source)
    }

    pub(crate) fn desired_period(&self) -> Duration {
        self.desired.effective_period()
    }

    pub(crate) fn existing_period(&self) -> Duration {
        self.existing.effective_period()
    }
}

type Rule = fn(&ScaleContext<'_>) -> Option<ValidationEvent>;

/// Rules that only make sense once a change of scale is known to be needed,
/// in the order their events are reported.
const RESCALING_RULES: [(&str, Rule); 11] = [
    ("time-step is not zero", time_step::time_step_is_zero),
    ("time-step is not negative", time_step::time_step_is_negative),
    ("desired function is known", function::desired_function_is_unknown),
    ("no downscaling", period::downscaling_requested),
    ("desired period is a multiple of the existing period", period::desired_period_is_multiple_of_existing),
    ("function does not change without the period", period::function_changed_without_period),
    ("no accumulation of instantaneous values", function::accumulating_instantaneous),
    ("only accumulations are accumulated", function::accumulating_non_accumulation),
    ("time-step does not exceed the desired period", time_step::time_step_exceeds_desired_period),
    ("time-step differs from the desired period", time_step::time_step_matches_desired_period),
    ("desired period is a multiple of the time-step", time_step::desired_period_is_multiple_of_time_step),
];

const DECLARATION_RULE: (&str, Rule) =
    ("declared existing time scale matches the data", consistency::validate_declaration);

/// Tunables for [`ScaleValidator`]. Deserializable from the declaration layer;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Emit a `Debug` event for every rule that passes.
    pub report_passes: bool,
}

/// Checks whether an existing time scale can be rescaled to a desired one.
///
/// Like a linter, it never stops at the first problem: every rule runs and
/// all findings are returned together.
#[derive(Debug, Clone, Default)]
pub struct ScaleValidator {
    options: ValidationOptions,
}

impl ScaleValidator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Validates the change from `existing` to `desired` for data sampled every
    /// `time_step`. `source_label` only appears in messages.
    ///
    /// # Returns
    /// - `Ok(events)`, empty when the change of scale (if any) is valid.
    /// - `Err(ScaleError::MissingArgument)` if `source_label` is blank.
    pub fn validate(
        &self,
        declared_existing: Option<TimeScale>,
        existing: TimeScale,
        desired: TimeScale,
        time_step: Duration,
        source_label: &str,
    ) -> Result<Vec<ValidationEvent>, ScaleError> {
        if source_label.trim().is_empty() {
            return Err(ScaleError::MissingArgument("data source identifier"));
        }

        let ctx = ScaleContext { declared_existing, existing, desired, time_step, source: source_label };
        let mut events = Vec::new();

        self.apply(&ctx, DECLARATION_RULE, &mut events);
        if is_change_of_scale_required(&existing, &desired) {
            for rule in RESCALING_RULES {
                self.apply(&ctx, rule, &mut events);
            }
        }

        tracing::debug!(
            source = source_label,
            %existing,
            %desired,
            %time_step,
            events = events.len(),
            "validated the time scale of a data source"
        );

        Ok(events)
    }

    fn apply(&self, ctx: &ScaleContext<'_>, (name, rule): (&str, Rule), events: &mut Vec<ValidationEvent>) {
        match rule(ctx) {
            Some(event) => events.push(event),
            None if self.options.report_passes => {
                events.push(ValidationEvent::debug(ctx.message(format_args!("passed the check '{name}'."))));
            }
            None => {}
        }
    }
}

/// Validates with the default [`ValidationOptions`].
pub fn validate(
    declared_existing: Option<TimeScale>,
    existing: TimeScale,
    desired: TimeScale,
    time_step: Duration,
    source_label: &str,
) -> Result<Vec<ValidationEvent>, ScaleError> {
    ScaleValidator::default().validate(declared_existing, existing, desired, time_step, source_label)
}

/// True when moving from `existing` to `desired` means aggregating values.
///
/// Instantaneous scales are interchangeable, and an unknown existing function
/// at the desired period is taken to already be the desired function.
pub fn is_change_of_scale_required(existing: &TimeScale, desired: &TimeScale) -> bool {
    let both_instantaneous = existing.is_instantaneous() && desired.is_instantaneous();
    let unknown_at_same_period = existing.function() == ScaleFunction::Unknown
        && existing.effective_period() == desired.effective_period();

    existing != desired && !both_instantaneous && !unknown_at_same_period
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::MonthDay;
    use crate::validation::event::{has_event, Severity};
    use rstest::rstest;

    const LEFT: &str = "While validating a LEFT data source: ";

    fn scale(period: Duration, function: ScaleFunction) -> TimeScale {
        TimeScale::of(period, function).unwrap()
    }

    fn messages(events: &[ValidationEvent]) -> Vec<&str> {
        events.iter().map(ValidationEvent::message).collect()
    }

    #[test]
    fn test_valid_upscaling_has_no_events() {
        let events = validate(
            None,
            scale(Duration::from_hours(1), ScaleFunction::Mean),
            scale(Duration::from_hours(6), ScaleFunction::Mean),
            Duration::from_hours(1),
            "LEFT",
        )
        .unwrap();
        assert!(events.is_empty(), "unexpected events: {events:?}");
    }

    #[test]
    fn test_downscaling_is_reported() {
        let events = validate(
            None,
            scale(Duration::from_hours(1), ScaleFunction::Mean),
            scale(Duration::from_mins(1), ScaleFunction::Mean),
            Duration::from_millis(1),
            "LEFT",
        )
        .unwrap();

        assert_eq!(
            messages(&events),
            vec![
                format!(
                    "{LEFT}Downscaling is not supported: the desired time scale of 'PT1M' cannot be smaller \
                     than the existing time scale of 'PT1H'."
                ),
                format!("{LEFT}The desired period must be an integer multiple of the existing period."),
            ]
        );
    }

    #[test]
    fn test_accumulating_a_mean_is_reported() {
        let events = validate(
            None,
            scale(Duration::from_hours(1), ScaleFunction::Mean),
            scale(Duration::from_hours(6), ScaleFunction::Total),
            Duration::from_hours(6),
            "RIGHT",
        )
        .unwrap();

        let prefix = "While validating a RIGHT data source: ";
        assert_eq!(
            messages(&events),
            vec![
                format!(
                    "{prefix}Cannot accumulate values that are not already accumulations. The function \
                     associated with the existing time scale must be a 'TOTAL', rather than a 'MEAN', or the \
                     function associated with the desired time scale must be changed."
                ),
                format!(
                    "{prefix}Insufficient data for rescaling: the period associated with the desired time \
                     scale matches the time-step of the data (PT6H)."
                ),
            ]
        );
    }

    #[test]
    fn test_every_error_is_collected_in_rule_order() {
        let events = validate(
            Some(scale(Duration::from_hours(2), ScaleFunction::Mean)),
            TimeScale::of_period(Duration::from_hours(2)).unwrap(),
            TimeScale::of_period(Duration::from_hours(1)).unwrap(),
            Duration::ZERO,
            "BASELINE",
        )
        .unwrap();

        let first_words: Vec<_> = events
            .iter()
            .map(|e| e.message().trim_start_matches("While validating a BASELINE data source: "))
            .map(|m| m.split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(
            first_words,
            vec![
                "The existing time scale in the project declaration is [PT2H,MEAN] and the existing time scale \
                 associated with the data is [PT2H,UNKNOWN]. This inconsistency is not allowed. Fix the \
                 declaration of the source.",
                "The period associated with the time-step cannot be zero.",
                "The desired time scale function is 'UNKNOWN'",
                "Downscaling is not supported",
                "The desired period must be an integer multiple of the existing period.",
                "The desired period of 'PT1H' is not an integer multiple of the data time-step, which is 'PT0S'. \
                 If the data has multiple time-steps that vary by time or feature, it may not be possible to \
                 achieve the desired time scale for all of the data. In that case, consider removing the desired \
                 time scale and performing an evaluation at the existing time scale of the data, where possible.",
            ]
        );
        assert!(events.iter().all(|e| e.severity() == Severity::Error));
    }

    #[test]
    fn test_unknown_existing_function_warns_for_totals() {
        let events = validate(
            None,
            TimeScale::of_period(Duration::from_hours(1)).unwrap(),
            scale(Duration::from_hours(24), ScaleFunction::Total),
            Duration::from_hours(1),
            "LEFT",
        )
        .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity(), Severity::Warn);
        assert!(!has_event(&events, Severity::Error));
    }

    #[test]
    fn test_accumulating_instantaneous_values_is_reported_once() {
        let events = validate(
            None,
            TimeScale::instantaneous(),
            scale(Duration::from_hours(6), ScaleFunction::Total),
            Duration::from_hours(1),
            "LEFT",
        )
        .unwrap();

        assert_eq!(
            messages(&events),
            vec![format!(
                "{LEFT}Cannot accumulate instantaneous values. Change the existing time scale or change the \
                 function associated with the desired time scale to something other than a 'TOTAL'."
            )]
        );
    }

    #[test]
    fn test_seasonal_desired_scale_uses_its_inferred_period() {
        let spring = TimeScale::window(
            MonthDay::new(4, 1).unwrap(),
            MonthDay::new(6, 30).unwrap(),
            ScaleFunction::Mean,
        );
        let events = validate(
            None,
            scale(Duration::from_days(1), ScaleFunction::Mean),
            spring,
            Duration::from_days(1),
            "LEFT",
        )
        .unwrap();
        assert!(events.is_empty(), "unexpected events: {events:?}");
    }

    #[rstest]
    #[case(scale(Duration::from_hours(6), ScaleFunction::Total), Duration::from_hours(1))]
    #[case(TimeScale::instantaneous(), Duration::ZERO)]
    #[case(scale(Duration::from_secs(30), ScaleFunction::Total), Duration::from_millis(-5))]
    fn test_unchanged_scale_is_a_no_op(#[case] same: TimeScale, #[case] time_step: Duration) {
        let events = validate(Some(same), same, same, time_step, "LEFT").unwrap();
        assert!(events.is_empty(), "unexpected events: {events:?}");
    }

    #[test]
    fn test_differing_instantaneous_declaration_only_warns() {
        let declared = scale(Duration::from_secs(1), ScaleFunction::Mean);
        let existing = scale(Duration::from_secs(60), ScaleFunction::Mean);

        let events = validate(Some(declared), existing, existing, Duration::from_secs(1), "LEFT").unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity(), Severity::Warn);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_blank_source_label_is_rejected(#[case] label: &str) {
        let hourly = scale(Duration::from_hours(1), ScaleFunction::Mean);
        let err = validate(None, hourly, hourly, Duration::from_hours(1), label).unwrap_err();
        assert_eq!(err, ScaleError::MissingArgument("data source identifier"));
    }

    #[test]
    fn test_report_passes_adds_a_debug_event_per_passing_rule() {
        let validator = ScaleValidator::new(ValidationOptions { report_passes: true });
        let events = validator
            .validate(
                None,
                scale(Duration::from_hours(1), ScaleFunction::Mean),
                scale(Duration::from_hours(6), ScaleFunction::Mean),
                Duration::from_hours(1),
                "LEFT",
            )
            .unwrap();

        assert_eq!(events.len(), 1 + RESCALING_RULES.len());
        assert!(events.iter().all(|e| e.severity() == Severity::Debug));
        assert_eq!(
            events[0].message(),
            format!("{LEFT}passed the check 'declared existing time scale matches the data'.")
        );
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ValidationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ValidationOptions::default());
        let options: ValidationOptions = serde_json::from_str(r#"{"report_passes": true}"#).unwrap();
        assert!(options.report_passes);
    }

    fn hourly(function: ScaleFunction) -> TimeScale {
        scale(Duration::from_hours(1), function)
    }

    #[rstest]
    #[case(hourly(ScaleFunction::Mean), hourly(ScaleFunction::Mean), false)]
    #[case(
        scale(Duration::from_secs(1), ScaleFunction::Mean),
        scale(Duration::from_secs(60), ScaleFunction::Total),
        false
    )]
    #[case(hourly(ScaleFunction::Unknown), hourly(ScaleFunction::Total), false)]
    #[case(hourly(ScaleFunction::Mean), hourly(ScaleFunction::Total), true)]
    #[case(hourly(ScaleFunction::Mean), scale(Duration::from_hours(6), ScaleFunction::Mean), true)]
    #[case(TimeScale::instantaneous(), scale(Duration::from_hours(6), ScaleFunction::Mean), true)]
    fn test_is_change_of_scale_required(
        #[case] existing: TimeScale,
        #[case] desired: TimeScale,
        #[case] expected: bool,
    ) {
        assert_eq!(is_change_of_scale_required(&existing, &desired), expected);
    }
}
