//! Money in request and response bodies.

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use barista_app::money::{Amount, DecimalMoneyCodec, MoneyCodec, PersistedMoney};

use crate::errors::ApiError;

/// Money Body
///
/// The persisted money pair, exchanged as decimal text so no amount passes
/// through a JSON float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MoneyBody {
    /// Decimal amount at the currency's minor unit, e.g. `"3.20"`
    pub amount: String,

    /// ISO 4217 alphabetic code, e.g. `"GBP"`
    pub currency: String,
}

impl From<&Amount> for MoneyBody {
    fn from(amount: &Amount) -> Self {
        let PersistedMoney { amount, currency } = DecimalMoneyCodec::new().encode(amount);

        Self { amount, currency }
    }
}

impl MoneyBody {
    /// Decode the body into an exact amount, as a 400 when it is malformed.
    pub(crate) fn decode(self, brief: &str) -> Result<Amount, ApiError> {
        let persisted = PersistedMoney::new(self.amount, self.currency);

        DecimalMoneyCodec::new()
            .decode(&persisted)
            .map_err(|error| ApiError::new(&error, StatusError::bad_request().brief(brief)))
    }
}
