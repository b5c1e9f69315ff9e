//! Barista application domain and persistence.
//!
//! Holds the money codec, the coffee menu and the order record, together with
//! the Postgres repositories and services that load and store them.

pub mod context;
pub mod database;
pub mod domain;
pub mod money;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
