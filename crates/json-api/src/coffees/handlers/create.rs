//! Create Coffee Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use barista_app::domain::coffees::models::{CoffeeUuid, NewCoffee};

use crate::{
    coffees::{errors::into_api_error, models::CoffeeResponse},
    errors::ApiError,
    extensions::*,
    money::MoneyBody,
    state::State,
};

/// Create Coffee Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCoffeeRequest {
    pub uuid: Uuid,
    pub name: String,
    pub price: MoneyBody,
}

impl TryFrom<CreateCoffeeRequest> for NewCoffee {
    type Error = ApiError;

    fn try_from(request: CreateCoffeeRequest) -> Result<Self, Self::Error> {
        let price = request.price.decode("Invalid price")?;

        Ok(NewCoffee {
            uuid: CoffeeUuid::from_uuid(request.uuid),
            name: request.name,
            price,
        })
    }
}

/// Create Coffee Handler
#[endpoint(
    tags("coffees"),
    summary = "Create Coffee",
    responses(
        (status_code = StatusCode::CREATED, description = "Coffee created"),
        (status_code = StatusCode::CONFLICT, description = "Coffee already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCoffeeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CoffeeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let coffee = state
        .coffees
        .create_coffee(json.into_inner().try_into()?)
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/coffees/{}", coffee.uuid()), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(coffee.into()))
}
