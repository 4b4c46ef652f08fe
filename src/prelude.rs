//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    delivery::{DeliveryField, DeliveryInfo},
    fixtures::{CheckoutFixture, CheckoutParts, FixtureError},
    items::CartItem,
    orders::NewOrder,
    payment::PaymentMethod,
    pricing::PricingError,
    validation::{ValidationErrors, validate_delivery},
};
