use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::factory::CustomerFactory;
use crate::application::validators::CommonRules;
use crate::domain::customer::CustomerId;
use crate::domain::repositories::SessionFactory;
use crate::mediator::{HandlerFault, ResponseHandler, RuleSet, ValueOutcome};

/// Request body for creating a customer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddCustomerRequest {
    #[serde(default)]
    pub name: String,
}

impl AddCustomerRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn rules() -> RuleSet<Self> {
        RuleSet::new().name("name", |r: &Self| r.name.as_str())
    }
}

/// Identifier assigned to the new customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCustomerResponse {
    pub id: CustomerId,
}

pub struct AddCustomerHandler {
    factory: CustomerFactory,
    sessions: Arc<dyn SessionFactory>,
}

impl AddCustomerHandler {
    pub fn new(sessions: Arc<dyn SessionFactory>) -> Self {
        Self {
            factory: CustomerFactory,
            sessions,
        }
    }
}

#[async_trait]
impl ResponseHandler<AddCustomerRequest, AddCustomerResponse> for AddCustomerHandler {
    async fn handle(&self, request: AddCustomerRequest) -> Result<ValueOutcome<AddCustomerResponse>, HandlerFault> {
        let session = self.sessions.begin();
        let customer = self.factory.from_add(request);

        let customer = session.customers.add(customer).await?;
        session.unit_of_work.save_changes().await?;

        tracing::info!(customer_id = customer.id(), "Customer added");

        Ok(ValueOutcome::success(AddCustomerResponse { id: customer.id() }))
    }
}
