use std::sync::Arc;

use super::repositories::InMemoryCustomerRepository;
use super::store::{ChangeSet, DbContext};
use super::unit_of_work::InMemoryUnitOfWork;
use crate::domain::repositories::{Session, SessionFactory};

/// Hands out sessions over one shared [`DbContext`], each with its own change set
#[derive(Debug, Clone)]
pub struct InMemorySessionFactory {
    context: Arc<DbContext>,
}

impl InMemorySessionFactory {
    pub fn new(context: Arc<DbContext>) -> Self {
        Self { context }
    }
}

impl SessionFactory for InMemorySessionFactory {
    fn begin(&self) -> Session {
        let changes = Arc::new(ChangeSet::new());

        Session {
            customers: Arc::new(InMemoryCustomerRepository::new(self.context.clone(), changes.clone())),
            unit_of_work: Arc::new(InMemoryUnitOfWork::new(self.context.clone(), changes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;
    use crate::infrastructure::store::MAX_NAME_LENGTH;

    #[tokio::test]
    async fn sessions_commit_only_their_own_writes() {
        let sessions = InMemorySessionFactory::new(Arc::new(DbContext::new()));
        let first = sessions.begin();
        let second = sessions.begin();

        let acme = first.customers.add(Customer::new("Acme")).await.unwrap();
        second
            .customers
            .add(Customer::new("x".repeat(MAX_NAME_LENGTH + 1)))
            .await
            .unwrap();

        assert!(second.unit_of_work.save_changes().await.is_err());
        first.unit_of_work.save_changes().await.unwrap();

        assert_eq!(first.customers.get(acme.id()).await.unwrap(), Some(acme));
        assert_eq!(second.customers.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn saving_an_untouched_session_changes_nothing() {
        let sessions = InMemorySessionFactory::new(Arc::new(DbContext::new()));
        let writer = sessions.begin();
        writer.customers.add(Customer::new("Acme")).await.unwrap();

        sessions.begin().unit_of_work.save_changes().await.unwrap();

        assert!(writer.customers.list().await.unwrap().is_empty());
    }
}
