//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{coffees::PgCoffeesService, orders::PgOrdersService},
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub(crate) db: TestDb,
    pub(crate) coffees: PgCoffeesService,
    pub(crate) orders: PgOrdersService,
}

impl TestContext {
    /// Fresh database with migrations applied and services bound to it.
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            coffees: PgCoffeesService::new(db.clone()),
            orders: PgOrdersService::new(db),
            db: test_db,
        }
    }
}
