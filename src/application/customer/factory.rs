use super::add::AddCustomerRequest;
use super::model::CustomerModel;
use super::update::UpdateCustomerRequest;
use crate::domain::customer::Customer;

/// Maps requests to entities and entities to models
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerFactory;

impl CustomerFactory {
    pub fn from_add(&self, request: AddCustomerRequest) -> Customer {
        Customer::new(request.name)
    }

    pub fn from_update(&self, request: UpdateCustomerRequest) -> Customer {
        Customer::from_persistence(request.id, request.name)
    }

    pub fn model(&self, customer: &Customer) -> CustomerModel {
        CustomerModel {
            id: customer.id(),
            name: customer.name().to_string(),
        }
    }
}
