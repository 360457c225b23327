use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::customer::{Customer, CustomerId};
use crate::domain::repositories::{CustomerRepository, StoreError};
use crate::infrastructure::store::{ChangeSet, DbContext};

/// In-memory implementation of CustomerRepository
///
/// Stages writes into the [`ChangeSet`] its unit of work commits.
#[derive(Debug, Clone)]
pub struct InMemoryCustomerRepository {
    context: Arc<DbContext>,
    changes: Arc<ChangeSet>,
}

impl InMemoryCustomerRepository {
    /// Creates a new InMemoryCustomerRepository
    ///
    /// # Arguments
    /// * `context` - Committed rows, shared by every session
    /// * `changes` - Change set shared with the session's unit of work
    pub fn new(context: Arc<DbContext>, changes: Arc<ChangeSet>) -> Self {
        Self { context, changes }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn add(&self, customer: Customer) -> Result<Customer, StoreError> {
        self.context.stage_insert(&self.changes, customer)
    }

    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        self.context.find(id)
    }

    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        self.context.all()
    }

    async fn update(&self, customer: Customer) -> Result<(), StoreError> {
        self.context.stage_update(&self.changes, customer)
    }

    async fn delete(&self, id: CustomerId) -> Result<(), StoreError> {
        self.context.stage_delete(&self.changes, id)
    }
}
