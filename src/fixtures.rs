//! Fixtures
//!
//! YAML descriptions of a checkout: the cart, the delivery form and the
//! payment choice.

use std::{fs, path::Path};

use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    delivery::DeliveryInfo,
    items::CartItem,
    payment::PaymentMethod,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Cart construction error
    #[error("Failed to create cart: {0}")]
    Cart(#[from] CartError),
}

/// A checkout as described in YAML
#[derive(Debug, Deserialize)]
pub struct CheckoutFixture {
    /// ISO currency code, `USD` when omitted
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Line items
    #[serde(default)]
    pub items: Vec<CartItem>,

    /// Delivery form contents
    #[serde(default)]
    pub delivery: DeliveryInfo,

    /// Payment form choice (`online`, `cod`, `pos`)
    #[serde(default)]
    pub payment: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// The pieces of a checkout, ready to hand to a view.
#[derive(Debug)]
pub struct CheckoutParts {
    /// The cart
    pub cart: Cart,

    /// The delivery form contents
    pub delivery: DeliveryInfo,

    /// The selected payment method
    pub payment_method: PaymentMethod,
}

impl CheckoutFixture {
    /// Load a fixture from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::parse(&contents)
    }

    /// Parse a fixture from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn parse(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Build the cart and form state described by the fixture
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown currency or an invalid cart.
    pub fn into_parts(self) -> Result<CheckoutParts, FixtureError> {
        let currency = parse_currency(&self.currency)?;

        Ok(CheckoutParts {
            cart: Cart::with_items(self.items, currency)?,
            delivery: self.delivery,
            payment_method: PaymentMethod::from_form_value(&self.payment),
        })
    }
}

/// Parse an ISO currency code
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for codes other than GBP, USD and EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    const YAML: &str = r"
items:
  - id: burger
    name: Burger
    price: 10
    quantity: 2
    img: /img/burger.png
  - id: fries
    name: Fries
    price: 5
    quantity: 1
delivery:
  name: Ada
  scheduleDate: 2026-11-02
payment: cod
";

    #[test]
    fn parses_checkout_fixture() -> TestResult {
        let parts = CheckoutFixture::parse(YAML)?.into_parts()?;

        assert_eq!(parts.cart.len(), 2);
        assert_eq!(parts.cart.currency(), iso::USD);
        assert_eq!(parts.cart.total_amount()?, Decimal::from(25));
        assert_eq!(parts.delivery.name, "Ada");
        assert_eq!(parts.delivery.schedule_date, "2026-11-02");
        assert_eq!(parts.payment_method, PaymentMethod::Cod);

        Ok(())
    }

    #[test]
    fn missing_payment_falls_back_to_pos() -> TestResult {
        let parts = CheckoutFixture::parse("items: []")?.into_parts()?;

        assert_eq!(parts.payment_method, PaymentMethod::Pos);
        assert!(parts.cart.is_empty());

        Ok(())
    }

    #[test]
    fn unknown_currency_errors() -> TestResult {
        let result = CheckoutFixture::parse("currency: XYZ")?.into_parts();

        assert!(
            matches!(result, Err(FixtureError::UnknownCurrency(ref code)) if code == "XYZ"),
            "expected UnknownCurrency, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn zero_quantity_item_errors() -> TestResult {
        let yaml = "items:\n  - {id: a, name: A, price: 1, quantity: 0}\n";

        let result = CheckoutFixture::parse(yaml)?.into_parts();

        assert!(
            matches!(result, Err(FixtureError::Cart(CartError::ZeroQuantity(0, _)))),
            "expected ZeroQuantity, got {result:?}"
        );

        Ok(())
    }
}
