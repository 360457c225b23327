// Infrastructure layer module
// In-memory store and the adapters implementing the domain ports

pub mod repositories;
pub mod session;
pub mod store;
pub mod unit_of_work;

pub use session::InMemorySessionFactory;
pub use store::{ChangeSet, DbContext};
pub use unit_of_work::InMemoryUnitOfWork;
