use std::fmt;

use super::errors::OutcomeError;

/// Why a request was turned down
///
/// Carried on every [`Failure`] so the boundary never has to infer the
/// category from payload presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The validation gate rejected the request before any handler ran
    Validation,
    /// A handler refused the request on a business rule
    Rejected,
}

impl FailureKind {
    fn default_message(&self) -> &'static str {
        match self {
            FailureKind::Validation => "request is invalid",
            FailureKind::Rejected => "request was rejected",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Validation => write!(f, "validation"),
            FailureKind::Rejected => write!(f, "rejected"),
        }
    }
}

/// An expected, caller-facing failure
///
/// # Invariants
/// - The message is never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    kind: FailureKind,
    message: String,
}

impl Failure {
    /// Creates a failure; an empty message falls back to the kind's default
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            kind.default_message().to_string()
        } else {
            message
        };

        Self { kind, message }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Validation, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Rejected, message)
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of an operation that produces no payload (update, delete)
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Success,
    Failure(Failure),
}

impl Outcome {
    pub fn success() -> Self {
        Outcome::Success
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Outcome::Failure(Failure::new(kind, message))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn failure_ref(&self) -> Option<&Failure> {
        match self {
            Outcome::Failure(failure) => Some(failure),
            Outcome::Success => None,
        }
    }

    /// Message of the failure, if any
    pub fn message(&self) -> Option<&str> {
        self.failure_ref().map(Failure::message)
    }
}

impl From<Failure> for Outcome {
    fn from(failure: Failure) -> Self {
        Outcome::Failure(failure)
    }
}

/// Outcome of an operation that produces a payload (add, get, list)
///
/// `Empty` means the request was valid but nothing was found or produced.
/// It is a success, never a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ValueOutcome<T> {
    Value(T),
    Empty,
    Failure(Failure),
}

impl<T> ValueOutcome<T> {
    pub fn success(value: T) -> Self {
        ValueOutcome::Value(value)
    }

    pub fn empty() -> Self {
        ValueOutcome::Empty
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        ValueOutcome::Failure(Failure::new(kind, message))
    }

    /// `Some` becomes a value, `None` an empty success
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => ValueOutcome::Value(value),
            None => ValueOutcome::Empty,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ValueOutcome::Failure(_))
    }

    pub fn has_value(&self) -> bool {
        matches!(self, ValueOutcome::Value(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ValueOutcome::Empty)
    }

    pub fn failure_ref(&self) -> Option<&Failure> {
        match self {
            ValueOutcome::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.failure_ref().map(Failure::message)
    }

    /// Borrows the payload
    ///
    /// # Returns
    /// * `Ok(&T)` - If the outcome holds a value
    /// * `Err(OutcomeError)` - If it is empty or a failure
    pub fn value(&self) -> Result<&T, OutcomeError> {
        match self {
            ValueOutcome::Value(value) => Ok(value),
            ValueOutcome::Empty => Err(OutcomeError::NoValue),
            ValueOutcome::Failure(failure) => Err(OutcomeError::Failed(failure.message().to_string())),
        }
    }

    pub fn into_value(self) -> Result<T, OutcomeError> {
        match self {
            ValueOutcome::Value(value) => Ok(value),
            ValueOutcome::Empty => Err(OutcomeError::NoValue),
            ValueOutcome::Failure(failure) => Err(OutcomeError::Failed(failure.message)),
        }
    }

    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ValueOutcome::Value(value) => ValueOutcome::Value(f(value)),
            ValueOutcome::Empty => ValueOutcome::Empty,
            ValueOutcome::Failure(failure) => ValueOutcome::Failure(failure),
        }
    }
}

impl<T> From<Failure> for ValueOutcome<T> {
    fn from(failure: Failure) -> Self {
        ValueOutcome::Failure(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_value_has_value() {
        let outcome = ValueOutcome::success(42);

        assert!(outcome.has_value());
        assert!(!outcome.is_failure());
        assert!(!outcome.is_empty());
        assert_eq!(outcome.value(), Ok(&42));
    }

    #[test]
    fn empty_success_is_not_a_failure() {
        let outcome: ValueOutcome<i32> = ValueOutcome::empty();

        assert!(!outcome.has_value());
        assert!(!outcome.is_failure());
        assert!(outcome.is_empty());
        assert_eq!(outcome.value(), Err(OutcomeError::NoValue));
    }

    #[test]
    fn failure_reports_failure() {
        let outcome = Outcome::failure(FailureKind::Validation, "id must be greater than zero");

        assert!(outcome.is_failure());
        assert_eq!(outcome.message(), Some("id must be greater than zero"));
    }

    #[test]
    fn value_access_on_failure_is_typed_error() {
        let outcome: ValueOutcome<i32> = ValueOutcome::failure(FailureKind::Rejected, "nope");

        assert_eq!(
            outcome.into_value(),
            Err(OutcomeError::Failed("nope".to_string()))
        );
    }

    #[test]
    fn failure_message_is_never_empty() {
        let failure = Failure::validation("");
        assert_eq!(failure.message(), "request is invalid");

        let failure = Failure::rejected("   ");
        assert_eq!(failure.message(), "request was rejected");
        assert_eq!(failure.kind(), FailureKind::Rejected);
    }

    #[test]
    fn plain_success_has_no_message() {
        let outcome = Outcome::success();

        assert!(!outcome.is_failure());
        assert!(outcome.message().is_none());
    }

    #[test]
    fn from_option_maps_none_to_empty() {
        assert!(ValueOutcome::from_option(None::<i32>).is_empty());
        assert!(ValueOutcome::from_option(Some(1)).has_value());
    }

    #[test]
    fn map_keeps_empty_and_failure() {
        let empty: ValueOutcome<i32> = ValueOutcome::empty();
        assert!(empty.map(|v| v + 1).is_empty());

        let failed: ValueOutcome<i32> = Failure::validation("bad").into();
        let mapped = failed.map(|v| v.to_string());
        assert_eq!(mapped.message(), Some("bad"));

        assert_eq!(ValueOutcome::success(1).map(|v| v + 1).value(), Ok(&2));
    }
}
