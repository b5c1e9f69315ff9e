//! Coffees Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    domain::{
        audit::AuditFields,
        coffees::models::{Coffee, CoffeeUuid, NewCoffee},
        columns::try_get_money,
    },
    money::{DecimalMoneyCodec, MoneyCodec},
};

const LIST_COFFEES_SQL: &str = include_str!("sql/list_coffees.sql");
const GET_COFFEE_SQL: &str = include_str!("sql/get_coffee.sql");
const GET_COFFEES_SQL: &str = include_str!("sql/get_coffees.sql");
const CREATE_COFFEE_SQL: &str = include_str!("sql/create_coffee.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCoffeesRepository {
    codec: DecimalMoneyCodec,
}

impl PgCoffeesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn list_coffees(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Coffee>, sqlx::Error> {
        query_as::<Postgres, Coffee>(LIST_COFFEES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_coffee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        coffee: CoffeeUuid,
    ) -> Result<Coffee, sqlx::Error> {
        query_as::<Postgres, Coffee>(GET_COFFEE_SQL)
            .bind(coffee.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetch every coffee among `coffees`, ascending by uuid. Unknown ids are skipped.
    pub(crate) async fn get_coffees(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        coffees: &[CoffeeUuid],
    ) -> Result<Vec<Coffee>, sqlx::Error> {
        let uuids: Vec<Uuid> = coffees.iter().map(|coffee| coffee.into_uuid()).collect();

        query_as::<Postgres, Coffee>(GET_COFFEES_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_coffee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        coffee: NewCoffee,
    ) -> Result<Coffee, sqlx::Error> {
        let price = self.codec.encode(&coffee.price);

        query_as::<Postgres, Coffee>(CREATE_COFFEE_SQL)
            .bind(coffee.uuid.into_uuid())
            .bind(coffee.name)
            .bind(price.amount)
            .bind(price.currency)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Coffee {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            audit: AuditFields::try_from_row(row)?,
            name: row.try_get("name")?,
            price: try_get_money(row, "price_amount", "price_currency")?,
        })
    }
}
