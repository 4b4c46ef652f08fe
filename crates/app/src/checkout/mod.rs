//! Checkout

mod errors;
mod state;
mod view;

pub use errors::CheckoutError;
pub use state::{CheckoutState, Submission};
pub use view::{CONFIRMATION_ROUTE, CheckoutView};
