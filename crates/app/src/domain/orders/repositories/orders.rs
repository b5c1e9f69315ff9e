//! Orders Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    domain::{
        audit::AuditFields,
        columns::try_get_money,
        orders::{
            items::OrderItems,
            models::{Order, OrderUpdate, OrderUuid},
            state::OrderState,
        },
    },
    money::{Amount, DecimalMoneyCodec, MoneyCodec},
};

const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const UPDATE_ORDER_SQL: &str = include_str!("../sql/update_order.sql");

/// Order row before its items are attached.
pub(crate) struct OrderInsert<'a> {
    pub(crate) uuid: OrderUuid,
    pub(crate) customer: &'a str,
    pub(crate) state: OrderState,
    pub(crate) discount: i32,
    pub(crate) total: &'a Amount,
    pub(crate) waiter: &'a str,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository {
    codec: DecimalMoneyCodec,
}

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Load an order without its items.
    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderInsert<'_>,
    ) -> Result<Order, sqlx::Error> {
        let total = self.codec.encode(order.total);

        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.customer)
            .bind(order.state.as_str())
            .bind(order.discount)
            .bind(total.amount)
            .bind(total.currency)
            .bind(order.waiter)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        update: &OrderUpdate,
    ) -> Result<Order, sqlx::Error> {
        let total = update.total.as_ref().map(|total| self.codec.encode(total));

        let (total_amount, total_currency) = match total {
            Some(total) => (Some(total.amount), Some(total.currency)),
            None => (None, None),
        };

        query_as::<Postgres, Order>(UPDATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(update.state.map(OrderState::as_str))
            .bind(update.discount)
            .bind(total_amount)
            .bind(total_currency)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let state: String = row.try_get("state")?;

        let state = state
            .parse::<OrderState>()
            .map_err(|source| sqlx::Error::ColumnDecode {
                index: "state".to_string(),
                source: Box::new(source),
            })?;

        Ok(Self {
            audit: AuditFields::try_from_row(row)?,
            customer: row.try_get("customer")?,
            items: OrderItems::new(),
            state,
            discount: row.try_get("discount")?,
            total: try_get_money(row, "total_amount", "total_currency")?,
            waiter: row.try_get("waiter")?,
        })
    }
}
