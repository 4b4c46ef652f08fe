//! Pricing

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::items::CartItem;

/// Errors that can occur while calculating prices.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A line total or running sum overflowed the decimal range.
    #[error("price arithmetic overflowed for item {0}")]
    Overflow(String),

    /// The amount cannot be represented in the currency's minor units.
    #[error("amount {0} cannot be represented in minor units")]
    Unrepresentable(Decimal),
}

/// Calculates `price * quantity` for a single line item
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the multiplication overflows.
pub fn line_total(item: &CartItem) -> Result<Decimal, PricingError> {
    item.price
        .checked_mul(Decimal::from(item.quantity))
        .ok_or_else(|| PricingError::Overflow(item.id.clone()))
}

/// Calculates the total price of a list of line items
///
/// An empty list totals zero.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if any line total or the running sum overflows.
pub fn total_price(items: &[CartItem]) -> Result<Decimal, PricingError> {
    items.iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(line_total(item)?)
            .ok_or_else(|| PricingError::Overflow(item.id.clone()))
    })
}

/// Converts a decimal amount to `Money` in the given currency, rounding to minor units
///
/// # Errors
///
/// Returns [`PricingError::Unrepresentable`] if the amount does not fit in minor units.
pub fn to_money(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let scale = Decimal::from(10_i64.pow(currency.exponent));

    let minor_units = amount
        .checked_mul(scale)
        .and_then(|value| {
            value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
        .ok_or(PricingError::Unrepresentable(amount))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Formats an amount with exactly two decimal places, as payment widgets expect
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("{rounded:.2}")
}
