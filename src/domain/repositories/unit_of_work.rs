use async_trait::async_trait;

use super::errors::StoreError;

/// Commits the writes staged by the repositories of the same session
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn save_changes(&self) -> Result<(), StoreError>;
}
