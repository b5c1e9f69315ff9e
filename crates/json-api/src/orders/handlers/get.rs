//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use barista_app::domain::orders::models::OrderUuid;

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Get Order Handler
///
/// Returns an order with its coffees in ascending uuid order.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "The order"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .orders
        .get_order(OrderUuid::from_uuid(order.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}
