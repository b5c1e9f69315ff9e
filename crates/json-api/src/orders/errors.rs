//! Errors

use salvo::http::StatusError;
use tracing::error;

use barista_app::domain::orders::{OrdersServiceError, pricing::OrderTotalError};

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    let status = match &error {
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::NotFound => StatusError::not_found(),
        OrdersServiceError::InvalidReference => {
            StatusError::bad_request().brief("Order references an unknown coffee")
        }
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Pricing(OrderTotalError::NoItems) => {
            StatusError::bad_request().brief("Order has no items")
        }
        OrdersServiceError::Pricing(OrderTotalError::Money(source)) => {
            StatusError::bad_request().brief(format!("Order cannot be totalled: {source}"))
        }
        OrdersServiceError::MalformedMoney(source) => {
            error!("stored order total is malformed: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::CorruptState(source) => {
            error!("stored order state is corrupt: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage failed: {source}");

            StatusError::internal_server_error()
        }
    };

    ApiError::new(&error, status)
}
