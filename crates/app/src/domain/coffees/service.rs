//! Coffees service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::coffees::{
        errors::CoffeesServiceError,
        models::{Coffee, CoffeeUuid, NewCoffee},
        repository::PgCoffeesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCoffeesService {
    db: Db,
    repository: PgCoffeesRepository,
}

impl PgCoffeesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCoffeesRepository::new(),
        }
    }
}

#[async_trait]
impl CoffeesService for PgCoffeesService {
    async fn list_coffees(&self) -> Result<Vec<Coffee>, CoffeesServiceError> {
        let mut tx = self.db.begin().await?;

        let coffees = self.repository.list_coffees(&mut tx).await?;

        tx.commit().await?;

        Ok(coffees)
    }

    async fn get_coffee(&self, coffee: CoffeeUuid) -> Result<Coffee, CoffeesServiceError> {
        let mut tx = self.db.begin().await?;

        let coffee = self.repository.get_coffee(&mut tx, coffee).await?;

        tx.commit().await?;

        Ok(coffee)
    }

    async fn create_coffee(&self, coffee: NewCoffee) -> Result<Coffee, CoffeesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_coffee(&mut tx, coffee).await?;

        tx.commit().await?;

        debug!(coffee = %created.uuid(), name = %created.name, "coffee created");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait CoffeesService: Send + Sync {
    /// List every coffee on the menu, ascending by uuid.
    async fn list_coffees(&self) -> Result<Vec<Coffee>, CoffeesServiceError>;

    /// Retrieve a single coffee.
    async fn get_coffee(&self, coffee: CoffeeUuid) -> Result<Coffee, CoffeesServiceError>;

    /// Add a coffee to the menu.
    async fn create_coffee(&self, coffee: NewCoffee) -> Result<Coffee, CoffeesServiceError>;
}
