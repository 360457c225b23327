use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerId;

/// Customer projection returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: CustomerId,
    pub name: String,
}
