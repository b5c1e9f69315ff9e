//! Orders

pub mod errors;
pub mod items;
pub mod models;
pub mod pricing;
mod repositories;
pub mod service;
pub mod state;

pub use errors::OrdersServiceError;
pub use service::*;
