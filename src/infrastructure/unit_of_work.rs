use std::sync::Arc;

use async_trait::async_trait;

use super::store::{ChangeSet, DbContext};
use crate::domain::repositories::{StoreError, UnitOfWork};

/// Unit of work committing one session's change set
#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWork {
    context: Arc<DbContext>,
    changes: Arc<ChangeSet>,
}

impl InMemoryUnitOfWork {
    pub fn new(context: Arc<DbContext>, changes: Arc<ChangeSet>) -> Self {
        Self { context, changes }
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn save_changes(&self) -> Result<(), StoreError> {
        let applied = self.context.commit(&self.changes)?;
        tracing::debug!(applied, "Saved changes");
        Ok(())
    }
}
