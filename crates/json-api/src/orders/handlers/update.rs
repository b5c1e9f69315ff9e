//! Update Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use barista_app::domain::orders::{
    models::{OrderUpdate, OrderUuid},
    state::OrderState,
};

use crate::{
    errors::ApiError,
    extensions::*,
    money::MoneyBody,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Update Order Request
///
/// Omitted fields keep their stored value. Any state may be written.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderRequest {
    #[salvo(schema(value_type = Option<String>))]
    pub state: Option<OrderState>,
    pub discount: Option<i32>,
    pub total: Option<MoneyBody>,
}

impl TryFrom<UpdateOrderRequest> for OrderUpdate {
    type Error = ApiError;

    fn try_from(request: UpdateOrderRequest) -> Result<Self, Self::Error> {
        let total = request
            .total
            .map(|total| total.decode("Invalid total"))
            .transpose()?;

        Ok(OrderUpdate {
            state: request.state,
            discount: request.discount,
            total,
        })
    }
}

/// Update Order Handler
#[endpoint(
    tags("orders"),
    summary = "Update Order",
    responses(
        (status_code = StatusCode::OK, description = "The updated order"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = OrderUuid::from_uuid(order.into_inner());

    let order = state
        .orders
        .update_order(order, json.into_inner().try_into()?)
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::GBP};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use barista_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::{make_coffee, make_order, orders_service};

    use super::*;

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(repo, Router::with_path("orders/{order}").patch(handler))
    }

    #[tokio::test]
    async fn test_update_writes_state_discount_and_total() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut order = make_order(uuid, [make_coffee(Uuid::now_v7(), "Latte", 320)]);
        order.state = OrderState::Cancelled;
        order.discount = 150;

        let mut repo = MockOrdersService::new();

        repo.expect_update_order()
            .once()
            .withf(move |requested, update| {
                requested.into_uuid() == uuid
                    && *update
                        == OrderUpdate {
                            state: Some(OrderState::Cancelled),
                            discount: Some(150),
                            total: Some(Money::from_decimal(Decimal::new(288, 2), GBP)),
                        }
            })
            .return_once(move |_, _| Ok(order));

        repo.expect_get_order().never();
        repo.expect_create_order().never();

        let mut res = TestClient::patch(format!("http://example.com/orders/{uuid}"))
            .json(&json!({
                "state": "CANCELLED",
                "discount": 150,
                "total": { "amount": "2.88", "currency": "GBP" }
            }))
            .send(&make_service(repo))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.state, OrderState::Cancelled);
        assert_eq!(body.discount, 150, "discount is stored without range checks");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_state_name_returns_400() {
        let mut repo = MockOrdersService::new();

        repo.expect_update_order().never();
        repo.expect_get_order().never();
        repo.expect_create_order().never();

        let res = TestClient::patch(format!("http://example.com/orders/{}", Uuid::now_v7()))
            .json(&json!({ "state": "SPILLED" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_update_malformed_total_returns_400() {
        let mut repo = MockOrdersService::new();

        repo.expect_update_order().never();
        repo.expect_get_order().never();
        repo.expect_create_order().never();

        let res = TestClient::patch(format!("http://example.com/orders/{}", Uuid::now_v7()))
            .json(&json!({ "total": { "amount": "two pounds", "currency": "GBP" } }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_update_missing_order_returns_404() {
        let mut repo = MockOrdersService::new();

        repo.expect_update_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        repo.expect_get_order().never();
        repo.expect_create_order().never();

        let res = TestClient::patch(format!("http://example.com/orders/{}", Uuid::now_v7()))
            .json(&json!({ "state": "PAID" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
