use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::factory::CustomerFactory;
use super::model::CustomerModel;
use crate::application::validators::CommonRules;
use crate::domain::customer::CustomerId;
use crate::domain::repositories::SessionFactory;
use crate::mediator::{HandlerFault, ResponseHandler, RuleSet, ValueOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCustomerRequest {
    pub id: CustomerId,
}

impl GetCustomerRequest {
    pub fn new(id: CustomerId) -> Self {
        Self { id }
    }

    pub fn rules() -> RuleSet<Self> {
        RuleSet::new().id("id", |r: &Self| r.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCustomerResponse {
    pub customer: CustomerModel,
}

pub struct GetCustomerHandler {
    factory: CustomerFactory,
    sessions: Arc<dyn SessionFactory>,
}

impl GetCustomerHandler {
    pub fn new(sessions: Arc<dyn SessionFactory>) -> Self {
        Self {
            factory: CustomerFactory,
            sessions,
        }
    }
}

#[async_trait]
impl ResponseHandler<GetCustomerRequest, GetCustomerResponse> for GetCustomerHandler {
    async fn handle(&self, request: GetCustomerRequest) -> Result<ValueOutcome<GetCustomerResponse>, HandlerFault> {
        let session = self.sessions.begin();
        let customer = session.customers.get(request.id).await?;

        Ok(ValueOutcome::from_option(customer).map(|customer| GetCustomerResponse {
            customer: self.factory.model(&customer),
        }))
    }
}
