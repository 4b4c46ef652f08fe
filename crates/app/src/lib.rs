//! Storefront client: HTTP API access and the checkout and profile views.

pub mod api;
pub mod checkout;
pub mod context;
pub mod payment;
pub mod profile;

#[cfg(test)]
mod test;
