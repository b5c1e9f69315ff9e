//! Healthcheck

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Owner name the healthcheck reports under.
pub(crate) const HANDLER_OWNER: &str = module_path!();

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Reports that the process is up. It does not touch the database.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
