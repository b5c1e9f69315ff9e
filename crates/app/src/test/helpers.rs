//! Test Helpers

use rusty_money::{Money, iso::GBP};

use crate::{
    domain::coffees::{
        CoffeesService, CoffeesServiceError,
        models::{Coffee, CoffeeUuid, NewCoffee},
    },
    test::TestContext,
};

/// Add a GBP-priced coffee to the menu.
pub(crate) async fn create_coffee(
    ctx: &TestContext,
    name: &str,
    price_minor: i64,
) -> Result<Coffee, CoffeesServiceError> {
    ctx.coffees
        .create_coffee(NewCoffee {
            uuid: CoffeeUuid::now_v7(),
            name: name.to_string(),
            price: Money::from_minor(price_minor, GBP),
        })
        .await
}
