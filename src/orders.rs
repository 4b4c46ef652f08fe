//! Order submission payload

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::Cart,
    delivery::DeliveryInfo,
    items::CartItem,
    payment::PaymentMethod,
    pricing::PricingError,
};

/// Body of an order-creation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Line items at the time of submission
    pub cart_items: Vec<CartItem>,

    /// Delivery details
    pub delivery_info: DeliveryInfo,

    /// Sum of price × quantity over `cart_items`
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    /// Requested delivery date, duplicated from the delivery details
    pub schedule_date: String,

    /// How the order is paid for
    pub payment_method: PaymentMethod,

    /// Identifier of the approved external payment order, for online payments
    #[serde(rename = "orderID", default, skip_serializing_if = "Option::is_none")]
    pub payment_order_id: Option<String>,
}

impl NewOrder {
    /// Build a payload from the current cart and delivery details.
    ///
    /// The total is computed here from the cart rather than passed in.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total cannot be computed.
    pub fn from_cart(
        cart: &Cart,
        delivery: &DeliveryInfo,
        payment_method: PaymentMethod,
        payment_order_id: Option<String>,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            cart_items: cart.items().to_vec(),
            delivery_info: delivery.clone(),
            total_price: cart.total_amount()?,
            schedule_date: delivery.schedule_date.clone(),
            payment_method,
            payment_order_id,
        })
    }
}
