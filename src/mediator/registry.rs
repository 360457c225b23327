use std::any::{type_name, Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use super::errors::ConfigurationError;
use super::handler::{Handler, ResponseHandler};
use super::validation::RuleSet;

const NO_RESPONSE: &str = "()";

/// Identifies a binding: the request type and, for payload requests, the
/// response type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    request: TypeId,
    response: Option<TypeId>,
}

impl HandlerKey {
    pub fn of<R: 'static>() -> Self {
        Self {
            request: TypeId::of::<R>(),
            response: None,
        }
    }

    pub fn with_response<R: 'static, T: 'static>() -> Self {
        Self {
            request: TypeId::of::<R>(),
            response: Some(TypeId::of::<T>()),
        }
    }
}

struct HandlerBinding {
    request: &'static str,
    response: &'static str,
    // Arc<dyn Handler<R>> or Arc<dyn ResponseHandler<R, T>>, selected by the key
    handler: Box<dyn Any + Send + Sync>,
}

/// Type-indexed table of handlers and rule sets
///
/// Filled once at startup by explicit registration calls, then handed to the
/// [`Mediator`](super::Mediator), which only ever reads it.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<HandlerKey, HandlerBinding>,
    rules: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the handler for a request with no payload
    ///
    /// # Returns
    /// * `Err(ConfigurationError::DuplicateHandler)` - If the request is already bound
    pub fn register_handler<R, H>(&mut self, handler: H) -> Result<(), ConfigurationError>
    where
        R: Send + 'static,
        H: Handler<R> + 'static,
    {
        let handler: Arc<dyn Handler<R>> = Arc::new(handler);
        self.bind(HandlerKey::of::<R>(), type_name::<R>(), NO_RESPONSE, Box::new(handler))
    }

    /// Binds the handler for a request producing a `T`
    pub fn register_response_handler<R, T, H>(&mut self, handler: H) -> Result<(), ConfigurationError>
    where
        R: Send + 'static,
        T: Send + 'static,
        H: ResponseHandler<R, T> + 'static,
    {
        let handler: Arc<dyn ResponseHandler<R, T>> = Arc::new(handler);
        self.bind(
            HandlerKey::with_response::<R, T>(),
            type_name::<R>(),
            type_name::<T>(),
            Box::new(handler),
        )
    }

    /// Attaches the validation rules for a request type
    pub fn register_rules<R: 'static>(&mut self, rules: RuleSet<R>) -> Result<(), ConfigurationError> {
        match self.rules.entry(TypeId::of::<R>()) {
            Entry::Occupied(_) => Err(ConfigurationError::DuplicateRules(type_name::<R>())),
            Entry::Vacant(slot) => {
                tracing::debug!(request = type_name::<R>(), rules = rules.len(), "Registered rule set");
                slot.insert(Box::new(rules));
                Ok(())
            }
        }
    }

    pub fn resolve_handler<R>(&self) -> Result<Arc<dyn Handler<R>>, ConfigurationError>
    where
        R: Send + 'static,
    {
        self.handlers
            .get(&HandlerKey::of::<R>())
            .and_then(|binding| binding.handler.downcast_ref::<Arc<dyn Handler<R>>>())
            .cloned()
            .ok_or(ConfigurationError::HandlerNotRegistered {
                request: type_name::<R>(),
                response: NO_RESPONSE,
            })
    }

    pub fn resolve_response_handler<R, T>(&self) -> Result<Arc<dyn ResponseHandler<R, T>>, ConfigurationError>
    where
        R: Send + 'static,
        T: Send + 'static,
    {
        self.handlers
            .get(&HandlerKey::with_response::<R, T>())
            .and_then(|binding| binding.handler.downcast_ref::<Arc<dyn ResponseHandler<R, T>>>())
            .cloned()
            .ok_or(ConfigurationError::HandlerNotRegistered {
                request: type_name::<R>(),
                response: type_name::<T>(),
            })
    }

    /// Rules for `R`, if any were registered
    pub fn rules_for<R: 'static>(&self) -> Option<&RuleSet<R>> {
        self.rules
            .get(&TypeId::of::<R>())
            .and_then(|rules| rules.downcast_ref::<RuleSet<R>>())
    }

    pub fn contains(&self, key: &HandlerKey) -> bool {
        self.handlers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// (request, response) type names of every binding
    pub fn bindings(&self) -> Vec<(&'static str, &'static str)> {
        let mut bindings: Vec<_> = self
            .handlers
            .values()
            .map(|binding| (binding.request, binding.response))
            .collect();
        bindings.sort_unstable();
        bindings
    }

    fn bind(
        &mut self,
        key: HandlerKey,
        request: &'static str,
        response: &'static str,
        handler: Box<dyn Any + Send + Sync>,
    ) -> Result<(), ConfigurationError> {
        match self.handlers.entry(key) {
            Entry::Occupied(_) => Err(ConfigurationError::DuplicateHandler { request, response }),
            Entry::Vacant(slot) => {
                tracing::debug!(request, response, "Registered handler");
                slot.insert(HandlerBinding {
                    request,
                    response,
                    handler,
                });
                Ok(())
            }
        }
    }
}
