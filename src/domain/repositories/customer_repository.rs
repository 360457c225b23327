use async_trait::async_trait;

use super::errors::StoreError;
use crate::domain::customer::{Customer, CustomerId};

/// Repository trait for the Customer entity
///
/// Writes are staged and only become visible after
/// [`UnitOfWork::save_changes`](super::UnitOfWork::save_changes) of the same
/// [`Session`](super::Session).
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Stages an insert and returns the customer with its assigned id
    async fn add(&self, customer: Customer) -> Result<Customer, StoreError>;

    /// Find a customer by id
    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;

    /// All customers, ordered by id
    async fn list(&self) -> Result<Vec<Customer>, StoreError>;

    /// Stages a replacement; a missing customer is left alone
    async fn update(&self, customer: Customer) -> Result<(), StoreError>;

    /// Stages a removal; a missing customer is left alone
    async fn delete(&self, id: CustomerId) -> Result<(), StoreError>;
}
