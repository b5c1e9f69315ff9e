//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use barista_app::domain::{
    coffees::models::CoffeeUuid,
    orders::models::{NewOrder, OrderUuid},
};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub uuid: Uuid,
    pub customer: String,
    pub waiter: String,
    pub items: Vec<Uuid>,
    #[serde(default)]
    pub discount: i32,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            uuid: OrderUuid::from_uuid(request.uuid),
            customer: request.customer,
            waiter: request.waiter,
            items: request.items.into_iter().map(CoffeeUuid::from_uuid).collect(),
            discount: request.discount,
        }
    }
}

/// Create Order Handler
///
/// Places an order in the `INIT` state, totalled from its coffees.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::CONFLICT, description = "Order already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .orders
        .create_order(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid()), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
