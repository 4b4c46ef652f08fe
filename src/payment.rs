//! Payment methods

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an order is paid for.
///
/// Serialized with the names the order API records: `PayPal`, `COD`, `POS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Online payment through the payment widget.
    #[serde(rename = "PayPal", alias = "online")]
    Online,

    /// Cash on delivery.
    #[serde(rename = "COD", alias = "cod")]
    Cod,

    /// Point of sale. Also used when nothing was selected.
    #[default]
    #[serde(rename = "POS", alias = "pos")]
    Pos,
}

impl PaymentMethod {
    /// Interpret a payment form choice.
    ///
    /// `online` and `cod` select those methods; anything else falls back to
    /// point of sale.
    pub fn from_form_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "online" | "paypal" => PaymentMethod::Online,
            "cod" => PaymentMethod::Cod,
            _ => PaymentMethod::Pos,
        }
    }

    /// Whether the order must wait for a payment approval before it is created.
    pub fn requires_approval(self) -> bool {
        matches!(self, PaymentMethod::Online)
    }

    /// The name recorded on the order.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Online => "PayPal",
            PaymentMethod::Cod => "COD",
            PaymentMethod::Pos => "POS",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
