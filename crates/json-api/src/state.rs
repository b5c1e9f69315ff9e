//! Shared handler state

use std::sync::Arc;

use barista_app::{
    context::AppContext,
    domain::{coffees::CoffeesService, orders::OrdersService},
};

/// The services handlers reach through the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) coffees: Arc<dyn CoffeesService>,
    pub(crate) orders: Arc<dyn OrdersService>,
}

impl From<AppContext> for State {
    fn from(app: AppContext) -> Self {
        Self {
            coffees: app.coffees,
            orders: app.orders,
        }
    }
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(app.into())
    }
}
