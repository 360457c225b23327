use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::factory::CustomerFactory;
use super::model::CustomerModel;
use crate::domain::repositories::SessionFactory;
use crate::mediator::{HandlerFault, ResponseHandler, ValueOutcome};

/// Lists every customer; takes no parameters and has no rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCustomerRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCustomerResponse {
    pub customers: Vec<CustomerModel>,
}

pub struct ListCustomerHandler {
    factory: CustomerFactory,
    sessions: Arc<dyn SessionFactory>,
}

impl ListCustomerHandler {
    pub fn new(sessions: Arc<dyn SessionFactory>) -> Self {
        Self {
            factory: CustomerFactory,
            sessions,
        }
    }
}

#[async_trait]
impl ResponseHandler<ListCustomerRequest, ListCustomerResponse> for ListCustomerHandler {
    async fn handle(&self, _request: ListCustomerRequest) -> Result<ValueOutcome<ListCustomerResponse>, HandlerFault> {
        let session = self.sessions.begin();
        let customers = session.customers.list().await?;

        if customers.is_empty() {
            return Ok(ValueOutcome::empty());
        }

        let customers = customers.iter().map(|c| self.factory.model(c)).collect();

        Ok(ValueOutcome::success(ListCustomerResponse { customers }))
    }
}
