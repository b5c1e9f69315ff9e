//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use thiserror::Error;

use crate::errors::ApiError;

/// A value the router should have injected is missing.
#[derive(Debug, Error)]
#[error("depot has no {0}")]
pub(crate) struct MissingDepotValue(&'static str);

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| {
            ApiError::new(
                &MissingDepotValue(type_name::<T>()),
                StatusError::internal_server_error(),
            )
        })
    }
}
