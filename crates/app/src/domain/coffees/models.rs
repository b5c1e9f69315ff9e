//! Coffee Models

use crate::{domain::audit::AuditFields, money::Amount, uuids::TypedUuid};

/// Coffee UUID
pub type CoffeeUuid = TypedUuid<Coffee>;

/// Coffee Model
#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
    pub audit: AuditFields<CoffeeUuid>,
    pub name: String,
    pub price: Amount,
}

impl Coffee {
    #[must_use]
    pub fn uuid(&self) -> CoffeeUuid {
        self.audit.uuid
    }
}

/// New Coffee Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoffee {
    pub uuid: CoffeeUuid,
    pub name: String,
    pub price: Amount,
}
