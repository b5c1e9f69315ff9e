//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rusty_money::{Money, iso::GBP};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use barista_app::{
    context::AppContext,
    domain::{
        audit::AuditFields,
        coffees::{
            MockCoffeesService,
            models::{Coffee, CoffeeUuid},
        },
        orders::{
            MockOrdersService,
            items::OrderItems,
            models::{Order, OrderUuid},
            pricing::order_total,
            state::OrderState,
        },
    },
};

use crate::state::State;

fn strict_coffees_mock() -> MockCoffeesService {
    let mut coffees = MockCoffeesService::new();

    coffees.expect_list_coffees().never();
    coffees.expect_get_coffee().never();
    coffees.expect_create_coffee().never();

    coffees
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_get_order().never();
    orders.expect_create_order().never();
    orders.expect_update_order().never();

    orders
}

pub(crate) fn state_with(coffees: MockCoffeesService, orders: MockOrdersService) -> Arc<State> {
    State::from_app_context(AppContext {
        coffees: Arc::new(coffees),
        orders: Arc::new(orders),
    })
}

pub(crate) fn coffees_service(coffees: MockCoffeesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(coffees, strict_orders_mock())))
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_coffees_mock(), orders)))
            .push(route),
    )
}

pub(crate) fn make_coffee(uuid: Uuid, name: &str, price_pence: i64) -> Coffee {
    Coffee {
        audit: AuditFields {
            uuid: CoffeeUuid::from_uuid(uuid),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        },
        name: name.to_string(),
        price: Money::from_minor(price_pence, GBP),
    }
}

/// A freshly placed order for `coffees`, totalled from their prices.
pub(crate) fn make_order(uuid: Uuid, coffees: impl IntoIterator<Item = Coffee>) -> Order {
    let items: OrderItems = coffees.into_iter().collect();
    let total = order_total(&items).unwrap_or_else(|_| Money::from_minor(0, GBP));

    Order {
        audit: AuditFields {
            uuid: OrderUuid::from_uuid(uuid),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        },
        customer: "Ada".to_string(),
        items,
        state: OrderState::Init,
        discount: 0,
        total,
        waiter: "Grace".to_string(),
    }
}
