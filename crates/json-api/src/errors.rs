//! API Errors

use salvo::{
    Depot, Request, Response, Writer, async_trait,
    http::StatusError,
    oapi::{Components, EndpointOutRegister, Operation},
};

use crate::observability::phases::{FailureClass, record_failure};

/// An HTTP error response that remembers which error caused it.
///
/// Writing it records the error's failure class for the phase report before
/// rendering the status error.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusError,
    failure: FailureClass,
}

impl ApiError {
    /// Build a response for `error`, classified by the error's type.
    pub(crate) fn new<E: ?Sized>(error: &E, status: StatusError) -> Self {
        Self {
            status,
            failure: FailureClass::of_val(error),
        }
    }

    #[cfg(test)]
    pub(crate) fn failure(&self) -> FailureClass {
        self.failure
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> &StatusError {
        &self.status
    }
}

#[async_trait]
impl Writer for ApiError {
    async fn write(self, req: &mut Request, depot: &mut Depot, res: &mut Response) {
        record_failure(depot, self.failure);

        self.status.write(req, depot, res).await;
    }
}

/// Documents the same error responses as a bare [`StatusError`].
impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        StatusError::register(components, operation);
    }
}
