use std::sync::Arc;

use async_trait::async_trait;

use crate::application::validators::CommonRules;
use crate::domain::customer::CustomerId;
use crate::domain::repositories::SessionFactory;
use crate::mediator::{Handler, HandlerFault, Outcome, RuleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCustomerRequest {
    pub id: CustomerId,
}

impl DeleteCustomerRequest {
    pub fn new(id: CustomerId) -> Self {
        Self { id }
    }

    pub fn rules() -> RuleSet<Self> {
        RuleSet::new().id("id", |r: &Self| r.id)
    }
}

/// Deleting a missing customer succeeds without effect
pub struct DeleteCustomerHandler {
    sessions: Arc<dyn SessionFactory>,
}

impl DeleteCustomerHandler {
    pub fn new(sessions: Arc<dyn SessionFactory>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl Handler<DeleteCustomerRequest> for DeleteCustomerHandler {
    async fn handle(&self, request: DeleteCustomerRequest) -> Result<Outcome, HandlerFault> {
        let session = self.sessions.begin();
        session.customers.delete(request.id).await?;
        session.unit_of_work.save_changes().await?;

        tracing::info!(customer_id = request.id, "Customer deleted");

        Ok(Outcome::success())
    }
}
