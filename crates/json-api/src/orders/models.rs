//! Order request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use barista_app::domain::orders::{models::Order, state::OrderState};

use crate::{coffees::models::CoffeeResponse, money::MoneyBody};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// Who the order is for
    pub customer: String,

    /// Who took the order
    pub waiter: String,

    /// Current lifecycle state, by name
    #[salvo(schema(value_type = String))]
    pub state: OrderState,

    /// Discount percentage
    pub discount: i32,

    /// Order total
    pub total: MoneyBody,

    /// Ordered coffees, ascending by uuid
    pub items: Vec<CoffeeResponse>,

    /// The date and time the order was created
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            uuid: order.uuid().into_uuid(),
            total: MoneyBody::from(&order.total),
            customer: order.customer,
            waiter: order.waiter,
            state: order.state,
            discount: order.discount,
            items: order.items.into_iter().map(CoffeeResponse::from).collect(),
            created_at: order.audit.created_at.to_string(),
            updated_at: order.audit.updated_at.to_string(),
        }
    }
}
