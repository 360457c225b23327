// Repository ports (implemented in infrastructure)

pub mod customer_repository;
pub mod errors;
pub mod session;
pub mod unit_of_work;

pub use customer_repository::CustomerRepository;
pub use errors::StoreError;
pub use session::{Session, SessionFactory};
pub use unit_of_work::UnitOfWork;
