//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        coffees::{CoffeesService, PgCoffeesService},
        orders::{OrdersService, PgOrdersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub coffees: Arc<dyn CoffeesService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to the database or migrating it fails.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        let db = Db::new(pool);

        Ok(Self {
            coffees: Arc::new(PgCoffeesService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db)),
        })
    }
}
