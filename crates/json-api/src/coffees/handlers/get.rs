//! Get Coffee Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use barista_app::domain::coffees::models::CoffeeUuid;

use crate::{
    coffees::{errors::into_api_error, models::CoffeeResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Coffee Handler
#[endpoint(
    tags("coffees"),
    summary = "Get Coffee",
    responses(
        (status_code = StatusCode::OK, description = "The coffee"),
        (status_code = StatusCode::NOT_FOUND, description = "Coffee not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    coffee: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CoffeeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let coffee = state
        .coffees
        .get_coffee(CoffeeUuid::from_uuid(coffee.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(coffee.into()))
}
