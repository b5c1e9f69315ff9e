//! Order Models

use crate::{
    domain::{
        audit::AuditFields,
        coffees::models::CoffeeUuid,
        orders::{items::OrderItems, state::OrderState},
    },
    money::Amount,
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub audit: AuditFields<OrderUuid>,
    pub customer: String,
    pub items: OrderItems,
    pub state: OrderState,
    /// Percentage, intended 0-100. Not range-checked.
    pub discount: i32,
    pub total: Amount,
    pub waiter: String,
}

impl Order {
    #[must_use]
    pub fn uuid(&self) -> OrderUuid {
        self.audit.uuid
    }
}

/// New Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub customer: String,
    pub waiter: String,
    pub items: Vec<CoffeeUuid>,
    pub discount: i32,
}

/// Order Update Model
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderUpdate {
    pub state: Option<OrderState>,
    pub discount: Option<i32>,
    pub total: Option<Amount>,
}
