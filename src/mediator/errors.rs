use thiserror::Error;

/// Invalid access to a [`ValueOutcome`](super::ValueOutcome) payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("outcome holds no value")]
    NoValue,

    #[error("outcome is a failure: {0}")]
    Failed(String),
}

/// Registry misconfiguration; a programmer error, never a user input error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("duplicate handler for {request} -> {response}")]
    DuplicateHandler {
        request: &'static str,
        response: &'static str,
    },

    #[error("duplicate rule set for {0}")]
    DuplicateRules(&'static str),

    #[error("no handler registered for {request} -> {response}")]
    HandlerNotRegistered {
        request: &'static str,
        response: &'static str,
    },
}

/// Fault raised by a handler collaborator (store unavailable, defect)
pub type HandlerFault = Box<dyn std::error::Error + Send + Sync>;

/// Anything a dispatch can raise besides an expected [`Outcome`](super::Outcome)
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("handler fault: {0}")]
    Handler(#[source] HandlerFault),
}
