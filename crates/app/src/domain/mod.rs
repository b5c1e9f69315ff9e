//! Barista Domain Concerns

pub mod audit;
pub mod coffees;
pub mod orders;

mod columns;
