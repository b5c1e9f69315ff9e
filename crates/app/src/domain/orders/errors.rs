//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{
    domain::{
        columns::take_decode_error,
        orders::{pricing::OrderTotalError, state::UnknownOrderState},
    },
    money::MalformedMoneyError,
};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order already exists")]
    AlreadyExists,

    #[error("order not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("stored money value is malformed")]
    MalformedMoney(#[source] MalformedMoneyError),

    #[error("stored order state is not recognised")]
    CorruptState(#[source] UnknownOrderState),

    #[error("could not price order")]
    Pricing(#[from] OrderTotalError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let error = match take_decode_error::<MalformedMoneyError>(error) {
            Ok(malformed) => return Self::MalformedMoney(malformed),
            Err(error) => error,
        };

        let error = match take_decode_error::<UnknownOrderState>(error) {
            Ok(unknown) => return Self::CorruptState(unknown),
            Err(error) => error,
        };

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_state_maps_to_corrupt_state() {
        let error = OrdersServiceError::from(Error::ColumnDecode {
            index: "state".to_string(),
            source: Box::new(UnknownOrderState("3".to_string())),
        });

        assert!(
            matches!(error, OrdersServiceError::CorruptState(ref state) if state.0 == "3"),
            "expected CorruptState, got {error:?}"
        );
    }

    #[test]
    fn malformed_total_maps_to_malformed_money() {
        let error = OrdersServiceError::from(Error::ColumnDecode {
            index: "total_amount".to_string(),
            source: Box::new(MalformedMoneyError::UnknownCurrency("QQQ".to_string())),
        });

        assert!(
            matches!(error, OrdersServiceError::MalformedMoney(_)),
            "expected MalformedMoney, got {error:?}"
        );
    }

    #[test]
    fn other_decode_failures_stay_storage_errors() {
        let error = OrdersServiceError::from(Error::ColumnDecode {
            index: "discount".to_string(),
            source: Box::new(std::fmt::Error),
        });

        assert!(
            matches!(error, OrdersServiceError::Sql(Error::ColumnDecode { .. })),
            "expected Sql(ColumnDecode), got {error:?}"
        );
    }
}
