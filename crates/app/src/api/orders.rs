//! Orders resource.

use async_trait::async_trait;
use mockall::automock;
use reqwest::StatusCode;
use storefront::orders::NewOrder;
use tracing::{debug, instrument};

use crate::api::{
    ApiError, UserId,
    client::{ApiClient, read_json, read_text},
    models::{OrderConfirmation, OrderSummary},
};

/// Order endpoints of the storefront API.
#[automock]
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Create an order (`POST /api/orders/create`).
    async fn create_order(&self, order: NewOrder) -> Result<OrderConfirmation, ApiError>;

    /// List a user's orders (`GET /api/orders?userId=:id`).
    async fn orders_for_user(&self, user: UserId) -> Result<Vec<OrderSummary>, ApiError>;
}

/// [`OrdersApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpOrdersApi {
    client: ApiClient,
}

impl HttpOrdersApi {
    /// Create the resource on top of a shared client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersApi for HttpOrdersApi {
    #[instrument(skip_all, fields(payment_method = %order.payment_method, items = order.cart_items.len()))]
    async fn create_order(&self, order: NewOrder) -> Result<OrderConfirmation, ApiError> {
        let response = self
            .client
            .post("/api/orders/create")
            .json(&order)
            .send()
            .await?;

        let (status, body) = read_text(response).await?;

        debug!(%status, "order create answered");

        confirmation_from(status, &body)
    }

    #[instrument(skip(self))]
    async fn orders_for_user(&self, user: UserId) -> Result<Vec<OrderSummary>, ApiError> {
        let response = self
            .client
            .get("/api/orders")
            .query(&[("userId", user.as_str())])
            .send()
            .await?;

        read_json(response).await
    }
}

/// Decide whether a 2xx order-create response means the order exists.
///
/// `201 Created` always does. Any other 2xx only counts when the body carries
/// a message.
pub(crate) fn confirmation_from(
    status: StatusCode,
    body: &str,
) -> Result<OrderConfirmation, ApiError> {
    let parsed = serde_json::from_str::<OrderConfirmation>(body).ok();

    if status == StatusCode::CREATED {
        return Ok(parsed.unwrap_or_default());
    }

    match parsed {
        Some(confirmation) if confirmation.message.is_some() => Ok(confirmation),
        _ => Err(ApiError::UnexpectedResponse(format!(
            "order create answered {status} without a confirmation"
        ))),
    }
}
