//! Payment widget seam.
//!
//! Online orders are only created once the payment widget has approved the
//! amount. The widget is modelled as an async call that either returns the
//! approval (carrying the widget's own order id) or fails.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use storefront::pricing::format_amount;
use thiserror::Error;

/// What the payment widget is asked to collect.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRequest {
    /// Currency the widget is opened with
    pub currency: &'static Currency,

    /// Amount in major units
    pub amount: Decimal,
}

impl PaymentRequest {
    /// ISO code of the currency, e.g. `USD`.
    pub fn currency_code(&self) -> &'static str {
        self.currency.iso_alpha_code
    }

    /// The amount as the widget expects it, with two decimal places.
    pub fn amount_value(&self) -> String {
        format_amount(self.amount)
    }
}

/// A successful approval from the payment widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentApproval {
    /// The widget's identifier for the approved payment order
    pub order_id: String,
}

impl PaymentApproval {
    /// Wrap the widget's order id.
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }
}

/// Reasons the payment widget did not approve.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// The buyer closed the widget.
    #[error("payment was cancelled")]
    Cancelled,

    /// The provider refused the payment.
    #[error("payment was declined: {0}")]
    Declined(String),
}

/// The external payment widget.
#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Ask the buyer to approve the payment.
    async fn request_approval(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentApproval, PaymentError>;
}
