//! Checkout states.

use storefront::validation::ValidationErrors;

use crate::{api::OrderConfirmation, payment::PaymentRequest};

/// Where a checkout is in the submission flow.
///
/// ```text
/// Editing -> (validate) -> Submitting       -> Succeeded | Failed
///                       -> AwaitingPayment  -> Submitting | Failed
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CheckoutState {
    /// Form is being filled in, or failed validation.
    #[default]
    Editing,

    /// Valid online order; the payment widget has been asked for approval.
    AwaitingPayment(PaymentRequest),

    /// Order-creation request in flight.
    Submitting,

    /// Order created.
    Succeeded(OrderConfirmation),

    /// Submission or payment failed; the form can be confirmed again.
    Failed,
}

impl CheckoutState {
    /// Whether the payment widget should be shown.
    pub fn shows_payment_widget(&self) -> bool {
        matches!(self, CheckoutState::AwaitingPayment(_))
    }
}

/// What a confirm attempt led to.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// Delivery details failed validation; nothing was sent.
    Invalid(ValidationErrors),

    /// Online payment: waiting on the payment widget.
    AwaitingPayment(PaymentRequest),

    /// Order created.
    Placed(OrderConfirmation),
}
