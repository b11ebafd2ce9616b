//! Diagnostics produced while validating a change of time scale.
use crate::rescaling::RescalingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How seriously the caller should treat a [`ValidationEvent`].
///
/// Declaration order is the rank used when ordering events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// The requested rescaling cannot be delivered.
    Error,
    /// Worth telling the user, but rescaling may proceed.
    Warn,
    Debug,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("ERROR"),
            Severity::Warn => f.write_str("WARN"),
            Severity::Debug => f.write_str("DEBUG"),
        }
    }
}

/// A severity-tagged message. Ordered by severity, then by message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ValidationEvent {
    severity: Severity,
    message: String,
}

impl ValidationEvent {
    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warn, message: message.into() }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self { severity: Severity::Debug, message: message.into() }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// True if any event has the given severity.
pub fn has_event(events: &[ValidationEvent], severity: Severity) -> bool {
    events.iter().any(|e| e.severity == severity)
}

/// Applies the usual policy to a batch of events: warnings and debug events
/// are logged, and any errors abort with a single [`RescalingError::Invalid`]
/// that lists them all. `context` names what was being rescaled.
pub fn check_for_errors(events: &[ValidationEvent], context: &str) -> Result<(), RescalingError> {
    let mut errors = Vec::new();

    for event in events {
        match event.severity {
            Severity::Error => errors.push(event.message.as_str()),
            Severity::Warn => tracing::warn!(context, "{}", event.message),
            Severity::Debug => tracing::debug!(context, "{}", event.message),
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    let details: String = errors.iter().map(|m| format!("\n        {m}")).collect();
    Err(RescalingError::Invalid { count: errors.len(), context: context.to_string(), details })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_severity_then_message() {
        let mut events = vec![
            ValidationEvent::debug("a"),
            ValidationEvent::warn("b"),
            ValidationEvent::error("z"),
            ValidationEvent::error("a"),
        ];
        events.sort();
        assert_eq!(
            events,
            vec![
                ValidationEvent::error("a"),
                ValidationEvent::error("z"),
                ValidationEvent::warn("b"),
                ValidationEvent::debug("a"),
            ]
        );
    }

    #[test]
    fn test_equality_needs_severity_and_message() {
        assert_eq!(ValidationEvent::warn("same"), ValidationEvent::warn("same"));
        assert_ne!(ValidationEvent::warn("same"), ValidationEvent::error("same"));
        assert_ne!(ValidationEvent::warn("same"), ValidationEvent::warn("other"));
    }

    #[test]
    fn test_has_event() {
        let events = vec![ValidationEvent::error("e"), ValidationEvent::warn("w")];
        assert!(has_event(&events, Severity::Error));
        assert!(has_event(&events, Severity::Warn));
        assert!(!has_event(&events, Severity::Debug));
        assert!(!has_event(&[], Severity::Debug));
    }

    #[test]
    fn test_check_for_errors_passes_without_errors() {
        let events = vec![ValidationEvent::warn("w"), ValidationEvent::debug("d")];
        assert!(check_for_errors(&events, "LEFT").is_ok());
    }

    #[test]
    fn test_check_for_errors_lists_every_error() {
        let events = vec![
            ValidationEvent::error("first problem"),
            ValidationEvent::warn("ignored"),
            ValidationEvent::error("second problem"),
        ];

        let err = check_for_errors(&events, "the LEFT time-series").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Encountered 2 errors while validating the rescaling of the LEFT time-series:\
             \n        first problem\
             \n        second problem"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ValidationEvent::warn("careful").to_string(), "WARN: careful");
    }
}
