//! Coffees

pub(crate) mod errors;
mod handlers;
pub(crate) mod models;

pub(crate) use handlers::*;

/// Owner name coffee handlers report under.
pub(crate) const HANDLER_OWNER: &str = module_path!();
