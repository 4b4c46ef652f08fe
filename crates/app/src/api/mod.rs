//! Storefront REST API access

mod client;
mod errors;
pub mod models;
pub mod orders;
mod session;
pub mod users;

pub use client::{ApiClient, ApiConfig};
pub use errors::ApiError;
pub use models::{OrderConfirmation, OrderSummary, PasswordChange, UserId, UserProfile};
pub use orders::{HttpOrdersApi, MockOrdersApi, OrdersApi};
pub use session::Session;
pub use users::{HttpUsersApi, MockUsersApi, UsersApi};
