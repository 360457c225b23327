/// Store-assigned customer identifier
pub type CustomerId = i64;

/// Customer entity
///
/// # Invariants
/// - `id` is `0` until the store assigns one on insert
/// - Name rules are enforced by the validation gate and the store, not here
///
/// # Example
/// ```
/// use customers_api::domain::customer::Customer;
///
/// let customer = Customer::new("Acme");
/// assert!(!customer.is_persisted());
///
/// let stored = customer.with_id(1);
/// assert_eq!(stored.id(), 1);
/// assert_eq!(stored.name(), "Acme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    /// Creates a customer that has not been stored yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }

    /// Reconstitutes a customer with a known identifier
    pub fn from_persistence(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn with_id(self, id: CustomerId) -> Self {
        Self { id, ..self }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_is_not_persisted() {
        let customer = Customer::new("Acme");

        assert_eq!(customer.id(), 0);
        assert!(!customer.is_persisted());
    }

    #[test]
    fn from_persistence_keeps_identifier() {
        let customer = Customer::from_persistence(42, "Acme");

        assert_eq!(customer.id(), 42);
        assert_eq!(customer.name(), "Acme");
        assert!(customer.is_persisted());
    }

    #[test]
    fn with_id_keeps_name() {
        let customer = Customer::new("Acme").with_id(3);

        assert_eq!(customer, Customer::from_persistence(3, "Acme"));
    }
}
