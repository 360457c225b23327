use std::sync::Arc;

use super::customer_repository::CustomerRepository;
use super::unit_of_work::UnitOfWork;

/// Repository and unit of work bound to one change set
///
/// A `save_changes` on `unit_of_work` commits exactly the writes staged
/// through `customers`, nothing else.
#[derive(Clone)]
pub struct Session {
    pub customers: Arc<dyn CustomerRepository>,
    pub unit_of_work: Arc<dyn UnitOfWork>,
}

/// Opens a fresh [`Session`] for each handled request
pub trait SessionFactory: Send + Sync {
    fn begin(&self) -> Session;
}
