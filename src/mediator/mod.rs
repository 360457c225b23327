// Request mediation
// Routes a typed request to its single handler, after the validation gate

pub mod dispatch;
pub mod errors;
pub mod handler;
pub mod outcome;
pub mod registry;
pub mod validation;

pub use dispatch::Mediator;
pub use errors::{ConfigurationError, DispatchError, HandlerFault, OutcomeError};
pub use handler::{Handler, ResponseHandler};
pub use outcome::{Failure, FailureKind, Outcome, ValueOutcome};
pub use registry::{HandlerKey, HandlerRegistry};
pub use validation::{Rule, RuleSet};
