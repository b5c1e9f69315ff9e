//! Orders service.

use std::collections::BTreeSet;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        coffees::{models::CoffeeUuid, repository::PgCoffeesRepository},
        orders::{
            errors::OrdersServiceError,
            items::OrderItems,
            models::{NewOrder, Order, OrderUpdate, OrderUuid},
            pricing::order_total,
            repositories::{OrderInsert, PgOrderItemsRepository, PgOrdersRepository},
            state::OrderState,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    coffees_repository: PgCoffeesRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            coffees_repository: PgCoffeesRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut found = self.orders_repository.get_order(&mut tx, order).await?;

        found.items = self.items_repository.get_order_items(&mut tx, order).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let coffee_uuids: Vec<CoffeeUuid> = order
            .items
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut tx = self.db.begin().await?;

        let items: OrderItems = self
            .coffees_repository
            .get_coffees(&mut tx, &coffee_uuids)
            .await?
            .into_iter()
            .collect();

        if items.len() != coffee_uuids.len() {
            return Err(OrdersServiceError::InvalidReference);
        }

        let total = order_total(&items)?;

        let mut created = self
            .orders_repository
            .create_order(
                &mut tx,
                OrderInsert {
                    uuid: order.uuid,
                    customer: &order.customer,
                    state: OrderState::Init,
                    discount: order.discount,
                    total: &total,
                    waiter: &order.waiter,
                },
            )
            .await?;

        self.items_repository
            .add_order_items(&mut tx, order.uuid, &coffee_uuids)
            .await?;

        tx.commit().await?;

        created.items = items;

        debug!(
            order = %created.uuid(),
            items = created.items.len(),
            total = %created.total,
            "order created"
        );

        Ok(created)
    }

    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut updated = self
            .orders_repository
            .update_order(&mut tx, order, &update)
            .await?;

        updated.items = self.items_repository.get_order_items(&mut tx, order).await?;

        tx.commit().await?;

        debug!(order = %order, state = %updated.state, "order updated");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieve a single order with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Place a new order in the `INIT` state, totalled from its items' prices.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Overwrite an order's state, discount and/or total.
    ///
    /// No transition rules are applied; any state may be written.
    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<Order, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::{
        domain::coffees::{CoffeesService, models::NewCoffee},
        test::{TestContext, helpers::create_coffee},
    };

    use super::*;

    fn new_order(uuid: OrderUuid, items: Vec<CoffeeUuid>) -> NewOrder {
        NewOrder {
            uuid,
            customer: "Li Lei".to_string(),
            waiter: "Han Meimei".to_string(),
            items,
            discount: 90,
        }
    }

    #[tokio::test]
    async fn create_order_starts_in_init_with_summed_total() -> TestResult {
        let ctx = TestContext::new().await;

        let latte = create_coffee(&ctx, "latte", 3_20).await?;
        let mocha = create_coffee(&ctx, "mocha", 3_50).await?;

        let uuid = OrderUuid::now_v7();

        let order = ctx
            .orders
            .create_order(new_order(uuid, vec![latte.uuid(), mocha.uuid()]))
            .await?;

        assert_eq!(order.uuid(), uuid);
        assert_eq!(order.state, OrderState::Init);
        assert_eq!(order.discount, 90);
        assert_eq!(order.total, Money::from_decimal(Decimal::new(6_70, 2), GBP));
        assert_eq!(order.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn get_order_reads_items_in_ascending_uuid_order() -> TestResult {
        let ctx = TestContext::new().await;

        let mut coffee_uuids = Vec::new();

        for (id, name) in [(7_u128, "latte"), (3, "mocha"), (9, "flat white")] {
            let coffee = ctx
                .coffees
                .create_coffee(NewCoffee {
                    uuid: CoffeeUuid::from_uuid(Uuid::from_u128(id)),
                    name: name.to_string(),
                    price: Money::from_minor(3_00, GBP),
                })
                .await?;

            coffee_uuids.push(coffee.uuid());
        }

        let uuid = OrderUuid::now_v7();

        ctx.orders
            .create_order(new_order(uuid, coffee_uuids))
            .await?;

        let order = ctx.orders.get_order(uuid).await?;

        let ids: Vec<u128> = order
            .items
            .uuids()
            .map(|coffee| coffee.into_uuid().as_u128())
            .collect();

        assert_eq!(ids, vec![3, 7, 9]);

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_items_collapse_to_one_association() -> TestResult {
        let ctx = TestContext::new().await;

        let latte = create_coffee(&ctx, "latte", 3_20).await?;

        let uuid = OrderUuid::now_v7();

        let order = ctx
            .orders
            .create_order(new_order(uuid, vec![latte.uuid(), latte.uuid()]))
            .await?;

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total, Money::from_minor(3_20, GBP));

        Ok(())
    }

    #[tokio::test]
    async fn create_order_with_unknown_coffee_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .orders
            .create_order(new_order(OrderUuid::now_v7(), vec![CoffeeUuid::now_v7()]))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn state_and_total_round_trip_through_storage() -> TestResult {
        let ctx = TestContext::new().await;

        let latte = create_coffee(&ctx, "latte", 3_20).await?;
        let uuid = OrderUuid::now_v7();

        let created = ctx
            .orders
            .create_order(new_order(uuid, vec![latte.uuid()]))
            .await?;

        let total = Money::from_decimal(Decimal::new(2_88, 2), GBP);

        ctx.orders
            .update_order(
                uuid,
                OrderUpdate {
                    state: Some(OrderState::Paid),
                    discount: None,
                    total: Some(total),
                },
            )
            .await?;

        let stored: String = sqlx::query_scalar("SELECT state FROM orders WHERE uuid = $1")
            .bind(uuid.into_uuid())
            .fetch_one(ctx.db.pool())
            .await?;

        let order = ctx.orders.get_order(uuid).await?;

        assert_eq!(stored, "PAID");
        assert_eq!(order.state, OrderState::Paid);
        assert_eq!(order.total, total);
        assert_eq!(order.discount, 90);
        assert!(
            order.audit.updated_at >= created.audit.updated_at,
            "updated_at should move forward on update"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_order_allows_any_transition() -> TestResult {
        let ctx = TestContext::new().await;

        let latte = create_coffee(&ctx, "latte", 3_20).await?;
        let uuid = OrderUuid::now_v7();

        ctx.orders
            .create_order(new_order(uuid, vec![latte.uuid()]))
            .await?;

        for state in [OrderState::Taken, OrderState::Init, OrderState::Cancelled] {
            let order = ctx
                .orders
                .update_order(
                    uuid,
                    OrderUpdate {
                        state: Some(state),
                        ..OrderUpdate::default()
                    },
                )
                .await?;

            assert_eq!(order.state, state);
        }

        Ok(())
    }

    #[tokio::test]
    async fn corrupt_state_surfaces_as_corrupt_state_error() -> TestResult {
        let ctx = TestContext::new().await;

        let latte = create_coffee(&ctx, "latte", 3_20).await?;
        let uuid = OrderUuid::now_v7();

        ctx.orders
            .create_order(new_order(uuid, vec![latte.uuid()]))
            .await?;

        sqlx::query("UPDATE orders SET state = '1' WHERE uuid = $1")
            .bind(uuid.into_uuid())
            .execute(ctx.db.pool())
            .await?;

        let result = ctx.orders.get_order(uuid).await;

        assert!(
            matches!(result, Err(OrdersServiceError::CorruptState(_))),
            "expected CorruptState, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_order_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .orders
            .update_order(OrderUuid::now_v7(), OrderUpdate::default())
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
