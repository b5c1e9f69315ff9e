//! Errors

use salvo::http::StatusError;
use tracing::error;

use barista_app::domain::coffees::CoffeesServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CoffeesServiceError) -> ApiError {
    let status = match &error {
        CoffeesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Coffee already exists")
        }
        CoffeesServiceError::MissingRequiredData | CoffeesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid coffee payload")
        }
        CoffeesServiceError::NotFound => StatusError::not_found(),
        CoffeesServiceError::MalformedMoney(source) => {
            error!("stored coffee price is malformed: {source}");

            StatusError::internal_server_error()
        }
        CoffeesServiceError::Sql(source) => {
            error!("coffee storage failed: {source}");

            StatusError::internal_server_error()
        }
    };

    ApiError::new(&error, status)
}
