//! List Coffees Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    coffees::{errors::into_api_error, models::CoffeeResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// List Coffees Handler
///
/// Returns the whole menu.
#[endpoint(
    tags("coffees"),
    summary = "List Coffees",
    responses(
        (status_code = StatusCode::OK, description = "The menu"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CoffeeResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let coffees = state
        .coffees
        .list_coffees()
        .await
        .map_err(into_api_error)?;

    Ok(Json(coffees.into_iter().map(CoffeeResponse::from).collect()))
}
