//! Test Helpers

use rust_decimal::Decimal;
use rusty_money::iso;
use storefront::{
    cart::{Cart, CartError},
    delivery::DeliveryInfo,
    items::CartItem,
};

use crate::api::{ApiError, UserId, UserProfile};

pub(crate) const TEST_USER: &str = "user-1";

pub(crate) fn test_user() -> UserId {
    UserId::new(TEST_USER)
}

/// Two burgers at 10 and one fries at 5: totals 25.
pub(crate) fn sample_cart() -> Result<Cart, CartError> {
    Cart::with_items(
        [
            CartItem::new("burger", "Burger", Decimal::from(10), 2),
            CartItem::new("fries", "Fries", Decimal::from(5), 1),
        ],
        iso::USD,
    )
}

pub(crate) fn valid_delivery() -> DeliveryInfo {
    DeliveryInfo {
        name: "Ada Lovelace".to_string(),
        mobile: "1234567890".to_string(),
        email: "ada@example.com".to_string(),
        city: "London".to_string(),
        state: "Greater London".to_string(),
        zip: "123456".to_string(),
        address: "12 St James's Square".to_string(),
        schedule_date: "2026-11-02".to_string(),
    }
}

pub(crate) fn sample_profile() -> UserProfile {
    UserProfile {
        id: Some(TEST_USER.to_string()),
        name: "Ada".to_string(),
        username: Some("ada_l".to_string()),
        email: "ada@example.com".to_string(),
        ..UserProfile::default()
    }
}

pub(crate) fn server_error() -> ApiError {
    ApiError::UnexpectedStatus {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        body: "boom".to_string(),
    }
}
