//! Storefront API wire models.

use std::fmt;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User identifier as used in API paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A user record as the profile endpoint returns it.
///
/// Fields the client does not know about are kept so the record can be
/// written back in full.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Record id
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Editable display name
    #[serde(default)]
    pub name: String,

    /// Account username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Any other fields returned by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Name to show: the username when there is one, otherwise the name.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|username| !username.is_empty())
            .unwrap_or(&self.name)
    }
}

/// One row of a user's order history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Order id
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Order total
    #[serde(with = "rust_decimal::serde::float", default)]
    pub total_price: Decimal,

    /// When the order was placed
    #[serde(default)]
    pub date: Option<Timestamp>,
}

/// Acknowledgement of a created order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Server message, e.g. "Order created successfully"
    #[serde(default)]
    pub message: Option<String>,

    /// Id of the stored order, when the server returns one
    #[serde(rename = "_id", alias = "orderId", default)]
    pub order_id: Option<String>,
}

/// Body of a password-change request.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    /// The password currently set
    pub current_password: String,

    /// The replacement password
    pub new_password: String,
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

/// A bare `{"message": ...}` response body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Pull a `message` out of a response body, if it has one.
pub(crate) fn message_from(body: &str) -> Option<String> {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|response| response.message)
}
