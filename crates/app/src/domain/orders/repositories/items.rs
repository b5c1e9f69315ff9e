//! Order Items Repository

use sqlx::{Postgres, Transaction, query, query_as};
use uuid::Uuid;

use crate::domain::{
    coffees::models::{Coffee, CoffeeUuid},
    orders::{items::OrderItems, models::OrderUuid},
};

const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");
const ADD_ORDER_ITEMS_SQL: &str = include_str!("../sql/add_order_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderItems, sqlx::Error> {
        let coffees = query_as::<Postgres, Coffee>(GET_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        Ok(coffees.into_iter().collect())
    }

    /// Associate coffees with an order. Already associated coffees are ignored.
    pub(crate) async fn add_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        coffees: &[CoffeeUuid],
    ) -> Result<u64, sqlx::Error> {
        let coffees: Vec<Uuid> = coffees.iter().copied().map(CoffeeUuid::into_uuid).collect();

        let rows_affected = query(ADD_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .bind(coffees)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
