//! Checkout errors.

use storefront::{cart::CartError, pricing::PricingError};
use thiserror::Error;

use crate::{api::ApiError, payment::PaymentError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("order has already been placed")]
    AlreadyPlaced,

    #[error("no payment is awaiting approval")]
    NotAwaitingPayment,

    #[error("cart error")]
    Cart(#[from] CartError),

    #[error("failed to compute order total")]
    Pricing(#[from] PricingError),

    #[error("order submission failed")]
    Submission(#[source] ApiError),

    #[error("payment not approved")]
    Payment(#[source] PaymentError),
}

impl From<ApiError> for CheckoutError {
    fn from(error: ApiError) -> Self {
        Self::Submission(error)
    }
}

impl From<PaymentError> for CheckoutError {
    fn from(error: PaymentError) -> Self {
        Self::Payment(error)
    }
}
