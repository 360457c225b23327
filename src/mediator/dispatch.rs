use std::any::type_name;
use std::sync::Arc;

use super::errors::{ConfigurationError, DispatchError};
use super::outcome::{Failure, Outcome, ValueOutcome};
use super::registry::HandlerRegistry;

/// Dispatch entry point: resolve -> validate -> invoke -> return
///
/// # Error Channels
/// - `Ok(Outcome::Failure)` - The request was rejected by the validation gate
///   or by the handler; the caller decides what to do
/// - `Err(DispatchError::Configuration)` - No handler is bound; a startup defect
/// - `Err(DispatchError::Handler)` - The handler faulted; passed through untouched
///
/// The registry is frozen on construction, so a `Mediator` can be cloned
/// into any number of concurrent tasks without locking.
#[derive(Clone)]
pub struct Mediator {
    registry: Arc<HandlerRegistry>,
}

impl Mediator {
    pub fn new(registry: HandlerRegistry) -> Self {
        tracing::info!(handlers = registry.len(), "Mediator ready");
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Dispatches a request that produces no payload
    pub async fn handle<R>(&self, request: R) -> Result<Outcome, DispatchError>
    where
        R: Send + 'static,
    {
        let handler = self.registry.resolve_handler::<R>().map_err(configuration_fault)?;

        if let Some(failure) = self.validate(&request) {
            return Ok(failure.into());
        }

        tracing::debug!(request = type_name::<R>(), "Dispatching");
        handler.handle(request).await.map_err(DispatchError::Handler)
    }

    /// Dispatches a request that produces a `T`
    pub async fn handle_with<R, T>(&self, request: R) -> Result<ValueOutcome<T>, DispatchError>
    where
        R: Send + 'static,
        T: Send + 'static,
    {
        let handler = self
            .registry
            .resolve_response_handler::<R, T>()
            .map_err(configuration_fault)?;

        if let Some(failure) = self.validate(&request) {
            return Ok(failure.into());
        }

        tracing::debug!(request = type_name::<R>(), response = type_name::<T>(), "Dispatching");
        handler.handle(request).await.map_err(DispatchError::Handler)
    }

    /// Checks at startup that `R` can be dispatched
    pub fn ensure_registered<R>(&self) -> Result<(), ConfigurationError>
    where
        R: Send + 'static,
    {
        self.registry.resolve_handler::<R>().map(|_| ())
    }

    pub fn ensure_response_registered<R, T>(&self) -> Result<(), ConfigurationError>
    where
        R: Send + 'static,
        T: Send + 'static,
    {
        self.registry.resolve_response_handler::<R, T>().map(|_| ())
    }

    fn validate<R: 'static>(&self, request: &R) -> Option<Failure> {
        let rules = self.registry.rules_for::<R>()?;

        match rules.validate(request) {
            Outcome::Success => None,
            Outcome::Failure(failure) => {
                tracing::debug!(
                    request = type_name::<R>(),
                    violations = rules.violations(request).len(),
                    message = failure.message(),
                    "Request rejected by validation"
                );
                Some(failure)
            }
        }
    }
}

fn configuration_fault(err: ConfigurationError) -> DispatchError {
    tracing::error!(error = %err, "Mediator misconfigured");
    DispatchError::Configuration(err)
}
