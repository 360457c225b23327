// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_customer_repository;

pub use in_memory_customer_repository::InMemoryCustomerRepository;
