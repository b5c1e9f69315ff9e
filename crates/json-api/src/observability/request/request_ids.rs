//! Request ID resolution and response header helpers.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Use the caller's id when it has one, otherwise mint a UUIDv7.
pub(super) fn resolve_request_id(header_value: Option<String>) -> String {
    match header_value {
        Some(value) if !value.trim().is_empty() => value,
        _ => Uuid::now_v7().to_string(),
    }
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => warn!(
            request_id,
            "could not encode request id for response header: {source}"
        ),
    }
}

/// Salvo leaves the status unset for plain successful responses.
pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}
