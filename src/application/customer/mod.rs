// Customer use cases: one request/response pair and handler per operation

pub mod add;
pub mod delete;
pub mod factory;
pub mod get;
pub mod list;
pub mod model;
pub mod update;

pub use add::{AddCustomerHandler, AddCustomerRequest, AddCustomerResponse};
pub use delete::{DeleteCustomerHandler, DeleteCustomerRequest};
pub use factory::CustomerFactory;
pub use get::{GetCustomerHandler, GetCustomerRequest, GetCustomerResponse};
pub use list::{ListCustomerHandler, ListCustomerRequest, ListCustomerResponse};
pub use model::CustomerModel;
pub use update::{UpdateCustomerHandler, UpdateCustomerRequest};
