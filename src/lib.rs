//! Storefront
//!
//! Checkout domain for the storefront client: cart line items and totals,
//! delivery form validation, payment methods and the order payload.

pub mod cart;
pub mod delivery;
pub mod fixtures;
pub mod items;
pub mod orders;
pub mod payment;
pub mod prelude;
pub mod pricing;
pub mod validation;
