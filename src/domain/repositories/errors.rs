use thiserror::Error;

/// Failures raised by the storage collaborator
///
/// These are faults, not business outcomes: handlers pass them up unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("constraint violated on {field}: {reason}")]
    Constraint { field: &'static str, reason: String },
}
