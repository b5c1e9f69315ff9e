//! Coffees service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{domain::columns::take_decode_error, money::MalformedMoneyError};

#[derive(Debug, Error)]
pub enum CoffeesServiceError {
    #[error("coffee already exists")]
    AlreadyExists,

    #[error("coffee not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("stored coffee price is malformed")]
    MalformedMoney(#[source] MalformedMoneyError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CoffeesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let error = match take_decode_error::<MalformedMoneyError>(error) {
            Ok(malformed) => return Self::MalformedMoney(malformed),
            Err(error) => error,
        };

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation | ErrorKind::ForeignKeyViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
