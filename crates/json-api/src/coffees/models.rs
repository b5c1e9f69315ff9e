//! Coffee request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use barista_app::domain::coffees::models::Coffee;

use crate::money::MoneyBody;

/// Coffee Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CoffeeResponse {
    /// The unique identifier of the coffee
    pub uuid: Uuid,

    /// Menu name
    pub name: String,

    /// Price at minor-unit precision
    pub price: MoneyBody,

    /// The date and time the coffee was created
    pub created_at: String,

    /// The date and time the coffee was last updated
    pub updated_at: String,
}

impl From<Coffee> for CoffeeResponse {
    fn from(coffee: Coffee) -> Self {
        Self {
            uuid: coffee.uuid().into_uuid(),
            price: MoneyBody::from(&coffee.price),
            name: coffee.name,
            created_at: coffee.audit.created_at.to_string(),
            updated_at: coffee.audit.updated_at.to_string(),
        }
    }
}
