use std::sync::Arc;

use async_trait::async_trait;

use super::factory::CustomerFactory;
use crate::application::validators::CommonRules;
use crate::domain::customer::CustomerId;
use crate::domain::repositories::SessionFactory;
use crate::mediator::{Handler, HandlerFault, Outcome, RuleSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomerRequest {
    pub id: CustomerId,
    pub name: String,
}

impl UpdateCustomerRequest {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    pub fn rules() -> RuleSet<Self> {
        RuleSet::new()
            .id("id", |r: &Self| r.id)
            .name("name", |r: &Self| r.name.as_str())
    }
}

/// Renames a customer; updating a missing customer succeeds without effect
pub struct UpdateCustomerHandler {
    factory: CustomerFactory,
    sessions: Arc<dyn SessionFactory>,
}

impl UpdateCustomerHandler {
    pub fn new(sessions: Arc<dyn SessionFactory>) -> Self {
        Self {
            factory: CustomerFactory,
            sessions,
        }
    }
}

#[async_trait]
impl Handler<UpdateCustomerRequest> for UpdateCustomerHandler {
    async fn handle(&self, request: UpdateCustomerRequest) -> Result<Outcome, HandlerFault> {
        let session = self.sessions.begin();
        let customer = self.factory.from_update(request);

        session.customers.update(customer).await?;
        session.unit_of_work.save_changes().await?;

        Ok(Outcome::success())
    }
}
