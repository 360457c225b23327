use std::sync::Arc;

use crate::application::customer::{
    AddCustomerHandler, AddCustomerRequest, AddCustomerResponse, DeleteCustomerHandler, DeleteCustomerRequest,
    GetCustomerHandler, GetCustomerRequest, GetCustomerResponse, ListCustomerHandler, ListCustomerRequest,
    ListCustomerResponse, UpdateCustomerHandler, UpdateCustomerRequest,
};
use crate::domain::repositories::SessionFactory;
use crate::infrastructure::{DbContext, InMemorySessionFactory};
use crate::mediator::{ConfigurationError, HandlerRegistry, Mediator};

/// Builds the mediator with every handler and rule set of the application
///
/// This is the single place where bindings are declared. Any duplicate
/// aborts startup with a [`ConfigurationError`]. Handlers open their own
/// session per request over the shared `context`.
pub fn build_mediator(context: Arc<DbContext>) -> Result<Mediator, ConfigurationError> {
    let sessions: Arc<dyn SessionFactory> = Arc::new(InMemorySessionFactory::new(context));

    let mut registry = HandlerRegistry::new();

    registry.register_response_handler::<AddCustomerRequest, AddCustomerResponse, _>(AddCustomerHandler::new(
        sessions.clone(),
    ))?;
    registry.register_rules(AddCustomerRequest::rules())?;

    registry.register_response_handler::<GetCustomerRequest, GetCustomerResponse, _>(GetCustomerHandler::new(
        sessions.clone(),
    ))?;
    registry.register_rules(GetCustomerRequest::rules())?;

    registry.register_response_handler::<ListCustomerRequest, ListCustomerResponse, _>(ListCustomerHandler::new(
        sessions.clone(),
    ))?;

    registry.register_handler::<UpdateCustomerRequest, _>(UpdateCustomerHandler::new(sessions.clone()))?;
    registry.register_rules(UpdateCustomerRequest::rules())?;

    registry.register_handler::<DeleteCustomerRequest, _>(DeleteCustomerHandler::new(sessions))?;
    registry.register_rules(DeleteCustomerRequest::rules())?;

    Ok(Mediator::new(registry))
}

/// Confirms that every request the HTTP boundary dispatches has a binding
pub fn verify_bindings(mediator: &Mediator) -> Result<(), ConfigurationError> {
    mediator.ensure_response_registered::<AddCustomerRequest, AddCustomerResponse>()?;
    mediator.ensure_response_registered::<GetCustomerRequest, GetCustomerResponse>()?;
    mediator.ensure_response_registered::<ListCustomerRequest, ListCustomerResponse>()?;
    mediator.ensure_registered::<UpdateCustomerRequest>()?;
    mediator.ensure_registered::<DeleteCustomerRequest>()?;

    Ok(())
}
