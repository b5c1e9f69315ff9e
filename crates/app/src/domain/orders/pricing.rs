//! Order Pricing

use rusty_money::{Money, MoneyError};
use thiserror::Error;

use crate::{domain::orders::items::OrderItems, money::Amount};

/// Errors that can occur while totalling an order.
#[derive(Debug, Error, PartialEq)]
pub enum OrderTotalError {
    /// No items were provided, so currency could not be determined.
    #[error("order has no items; cannot determine currency")]
    NoItems,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Sum the prices of every item in an order.
///
/// # Errors
///
/// - [`OrderTotalError::NoItems`]: the order has no items.
/// - [`OrderTotalError::Money`]: item prices are in different currencies.
pub fn order_total(items: &OrderItems) -> Result<Amount, OrderTotalError> {
    let first = items.iter().next().ok_or(OrderTotalError::NoItems)?;

    let total = items.iter().try_fold(
        Money::from_minor(0, first.price.currency()),
        |acc, coffee| acc.add(coffee.price),
    )?;

    Ok(total)
}
