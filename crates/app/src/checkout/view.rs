//! Checkout view.

use std::{fmt, sync::Arc};

use rusty_money::{Money, iso::Currency};
use storefront::{
    cart::Cart,
    delivery::{DeliveryField, DeliveryInfo, UnknownField},
    orders::NewOrder,
    payment::PaymentMethod,
    pricing::PricingError,
    validation::{ValidationErrors, validate_delivery},
};
use tracing::{debug, info, instrument, warn};

use crate::{
    api::{OrderConfirmation, OrdersApi},
    checkout::{CheckoutError, CheckoutState, Submission},
    payment::{PaymentApproval, PaymentGateway, PaymentRequest},
};

/// Where the client goes once an order has been created.
pub const CONFIRMATION_ROUTE: &str = "/thankYou";

/// State behind the checkout page: the cart, the delivery form and the
/// submission flow.
pub struct CheckoutView {
    cart: Cart,
    delivery: DeliveryInfo,
    payment_method: PaymentMethod,
    errors: ValidationErrors,
    order_error: Option<String>,
    state: CheckoutState,
    orders: Arc<dyn OrdersApi>,
}

impl fmt::Debug for CheckoutView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutView")
            .field("cart", &self.cart)
            .field("delivery", &self.delivery)
            .field("payment_method", &self.payment_method)
            .field("errors", &self.errors)
            .field("order_error", &self.order_error)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CheckoutView {
    /// Open a checkout for the given cart.
    #[must_use]
    pub fn new(cart: Cart, orders: Arc<dyn OrdersApi>) -> Self {
        Self {
            cart,
            delivery: DeliveryInfo::default(),
            payment_method: PaymentMethod::default(),
            errors: ValidationErrors::default(),
            order_error: None,
            state: CheckoutState::default(),
            orders,
        }
    }

    /// Replace the whole delivery form.
    #[must_use]
    pub fn with_delivery(mut self, delivery: DeliveryInfo) -> Self {
        self.delivery = delivery;
        self
    }

    /// The cart being checked out.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The delivery form as entered so far.
    pub fn delivery(&self) -> &DeliveryInfo {
        &self.delivery
    }

    /// Update one delivery field.
    ///
    /// A pending payment request is withdrawn; the form must be confirmed again.
    pub fn set_field(&mut self, field: DeliveryField, value: impl Into<String>) {
        self.delivery.set(field, value);
        self.withdraw_payment_request();
    }

    /// Update one delivery field by its form name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownField`] if the name is not a delivery field.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        self.set_field(name.parse()?, value);

        Ok(())
    }

    /// The selected payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Select a payment method, withdrawing any pending payment request.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment_method = method;
        self.withdraw_payment_request();
    }

    /// Add one of an item. A pending payment request is withdrawn.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Cart`] if the item is not in the cart.
    pub fn increment(&mut self, id: &str) -> Result<u32, CheckoutError> {
        let quantity = self.cart.increment(id)?;

        self.withdraw_payment_request();

        Ok(quantity)
    }

    /// Remove one of an item, keeping at least one. A pending payment request
    /// is withdrawn.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Cart`] if the item is not in the cart.
    pub fn decrement(&mut self, id: &str) -> Result<u32, CheckoutError> {
        let quantity = self.cart.decrement(id)?;

        self.withdraw_payment_request();

        Ok(quantity)
    }

    /// The order total, computed from the current line items.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total cannot be computed.
    pub fn total(&self) -> Result<Money<'static, Currency>, PricingError> {
        self.cart.total()
    }

    /// Errors from the most recent validation.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The message from the most recent failed submission or payment.
    pub fn order_error(&self) -> Option<&str> {
        self.order_error.as_deref()
    }

    /// Current step of the submission flow.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Where to navigate, once the order exists.
    pub fn redirect(&self) -> Option<&'static str> {
        matches!(self.state, CheckoutState::Succeeded(_)).then_some(CONFIRMATION_ROUTE)
    }

    /// Validate the form and either place the order or start the payment.
    ///
    /// Invalid delivery details never reach the network. Online payments stop
    /// at [`CheckoutState::AwaitingPayment`] until [`CheckoutView::approve`] or
    /// [`CheckoutView::settle_payment`] supplies the approval.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::AlreadyPlaced`] after a successful order. A failed
    /// submission is returned as an error and also recorded in
    /// [`CheckoutView::order_error`].
    #[instrument(skip(self), fields(payment_method = %self.payment_method))]
    pub async fn confirm(&mut self) -> Result<Submission, CheckoutError> {
        if matches!(self.state, CheckoutState::Succeeded(_)) {
            return Err(CheckoutError::AlreadyPlaced);
        }

        self.errors = validate_delivery(&self.delivery);

        if !self.errors.is_empty() {
            debug!(errors = self.errors.len(), "delivery details invalid");

            self.state = CheckoutState::Editing;

            return Ok(Submission::Invalid(self.errors.clone()));
        }

        self.order_error = None;

        if self.payment_method.requires_approval() {
            let request = self.payment_request()?;

            info!(
                amount = %request.amount_value(),
                currency = request.currency_code(),
                "awaiting payment approval"
            );

            self.state = CheckoutState::AwaitingPayment(request.clone());

            return Ok(Submission::AwaitingPayment(request));
        }

        let order = self.build_order(self.payment_method, None)?;

        self.submit(order).await.map(Submission::Placed)
    }

    /// Create the order for an approved online payment.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotAwaitingPayment`] unless a payment was
    /// requested by [`CheckoutView::confirm`], or the submission error.
    #[instrument(skip(self, approval), fields(payment_order_id = %approval.order_id))]
    pub async fn approve(
        &mut self,
        approval: PaymentApproval,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if !self.state.shows_payment_widget() {
            return Err(CheckoutError::NotAwaitingPayment);
        }

        let order = self.build_order(PaymentMethod::Online, Some(approval.order_id))?;

        self.submit(order).await
    }

    /// Wait for the payment widget and feed its result into the checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotAwaitingPayment`] unless a payment was
    /// requested, [`CheckoutError::Payment`] when the widget does not approve,
    /// or the submission error.
    pub async fn settle_payment(
        &mut self,
        gateway: &dyn PaymentGateway,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let CheckoutState::AwaitingPayment(request) = &self.state else {
            return Err(CheckoutError::NotAwaitingPayment);
        };

        match gateway.request_approval(request.clone()).await {
            Ok(approval) => self.approve(approval).await,
            Err(error) => {
                warn!(%error, "payment not approved");

                self.fail(format!("Payment not completed: {error}"));

                Err(error.into())
            }
        }
    }

    /// The approved amount must match the order that gets created, so any
    /// change to the form or cart sends the checkout back to editing.
    fn withdraw_payment_request(&mut self) {
        if self.state.shows_payment_widget() {
            debug!("checkout changed, payment request withdrawn");

            self.state = CheckoutState::Editing;
        }
    }

    fn payment_request(&mut self) -> Result<PaymentRequest, CheckoutError> {
        match self.cart.total_amount() {
            Ok(amount) => Ok(PaymentRequest {
                currency: self.cart.currency(),
                amount,
            }),
            Err(error) => {
                self.fail(format!("Error saving order: {error}"));

                Err(error.into())
            }
        }
    }

    fn build_order(
        &mut self,
        method: PaymentMethod,
        payment_order_id: Option<String>,
    ) -> Result<NewOrder, CheckoutError> {
        NewOrder::from_cart(&self.cart, &self.delivery, method, payment_order_id).map_err(
            |error| {
                self.fail(format!("Error saving order: {error}"));

                error.into()
            },
        )
    }

    async fn submit(&mut self, order: NewOrder) -> Result<OrderConfirmation, CheckoutError> {
        self.state = CheckoutState::Submitting;

        match self.orders.create_order(order).await {
            Ok(confirmation) => {
                info!(order_id = ?confirmation.order_id, "order placed");

                self.order_error = None;
                self.state = CheckoutState::Succeeded(confirmation.clone());

                Ok(confirmation)
            }
            Err(error) => {
                warn!(%error, "order submission failed");

                self.fail(format!("Error saving order: {error}"));

                Err(error.into())
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.order_error = Some(message);
        self.state = CheckoutState::Failed;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rust_decimal::Decimal;
    use rusty_money::iso;
    use storefront::cart::CartError;
    use testresult::TestResult;

    use crate::{
        api::MockOrdersApi,
        payment::{MockPaymentGateway, PaymentError},
        test::{sample_cart, server_error, valid_delivery},
    };

    use super::*;

    fn view(orders: MockOrdersApi) -> Result<CheckoutView, CartError> {
        Ok(CheckoutView::new(sample_cart()?, Arc::new(orders)).with_delivery(valid_delivery()))
    }

    fn confirmed(message: &str) -> OrderConfirmation {
        OrderConfirmation {
            message: Some(message.to_string()),
            order_id: Some("o1".to_string()),
        }
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_network() -> TestResult {
        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().never();

        let mut checkout = CheckoutView::new(sample_cart()?, Arc::new(orders));
        checkout.select_payment(PaymentMethod::Cod);

        let submission = checkout.confirm().await?;

        let Submission::Invalid(errors) = submission else {
            panic!("expected Invalid, got {submission:?}");
        };

        assert_eq!(errors.len(), 8);
        assert_eq!(checkout.errors(), &errors);
        assert_eq!(checkout.state(), &CheckoutState::Editing);
        assert_eq!(checkout.redirect(), None);

        Ok(())
    }

    #[tokio::test]
    async fn errors_are_replaced_not_merged() -> TestResult {
        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().never();

        let mut checkout = CheckoutView::new(sample_cart()?, Arc::new(orders));

        checkout.confirm().await?;

        assert_eq!(checkout.errors().len(), 8);

        let delivery = valid_delivery();
        for field in DeliveryField::ALL {
            checkout.set_field(field, delivery.get(field));
        }
        checkout.set_field(DeliveryField::Mobile, "12345");

        checkout.confirm().await?;

        assert_eq!(checkout.errors().len(), 1);
        assert_eq!(
            checkout.errors().get(DeliveryField::Mobile),
            Some("Invalid mobile number")
        );

        Ok(())
    }

    #[tokio::test]
    async fn cash_on_delivery_submits_directly() -> TestResult {
        let mut orders = MockOrdersApi::new();

        orders
            .expect_create_order()
            .once()
            .withf(|order| {
                order.payment_method == PaymentMethod::Cod
                    && order.total_price == Decimal::from(25)
                    && order.payment_order_id.is_none()
                    && order.schedule_date == "2026-11-02"
                    && order.cart_items.len() == 2
            })
            .return_once(|_| Ok(confirmed("Order created")));
        orders.expect_orders_for_user().never();

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Cod);

        let submission = checkout.confirm().await?;

        assert_eq!(submission, Submission::Placed(confirmed("Order created")));
        assert!(checkout.errors().is_empty());
        assert_eq!(checkout.redirect(), Some(CONFIRMATION_ROUTE));
        assert_eq!(checkout.order_error(), None);

        Ok(())
    }

    #[tokio::test]
    async fn unselected_payment_submits_as_point_of_sale() -> TestResult {
        let mut orders = MockOrdersApi::new();

        orders
            .expect_create_order()
            .once()
            .withf(|order| order.payment_method == PaymentMethod::Pos)
            .return_once(|_| Ok(OrderConfirmation::default()));

        let mut checkout = view(orders)?;

        checkout.confirm().await?;

        assert!(matches!(checkout.state(), CheckoutState::Succeeded(_)));

        Ok(())
    }

    #[tokio::test]
    async fn online_payment_waits_for_approval() -> TestResult {
        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().never();

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Online);

        let submission = checkout.confirm().await?;

        let expected = PaymentRequest {
            currency: iso::USD,
            amount: Decimal::from(25),
        };

        assert_eq!(submission, Submission::AwaitingPayment(expected.clone()));
        assert_eq!(checkout.state(), &CheckoutState::AwaitingPayment(expected));
        assert!(checkout.state().shows_payment_widget());
        assert_eq!(checkout.redirect(), None);

        Ok(())
    }

    #[tokio::test]
    async fn approval_creates_paypal_order_for_requested_amount() -> TestResult {
        let mut orders = MockOrdersApi::new();

        orders
            .expect_create_order()
            .once()
            .withf(|order| {
                order.payment_method == PaymentMethod::Online
                    && order.payment_order_id.as_deref() == Some("PAYPAL-42")
                    && order.total_price == Decimal::from(25)
            })
            .return_once(|_| Ok(confirmed("Order created")));

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Online);

        checkout.confirm().await?;

        let confirmation = checkout.approve(PaymentApproval::new("PAYPAL-42")).await?;

        assert_eq!(confirmation, confirmed("Order created"));
        assert_eq!(checkout.redirect(), Some(CONFIRMATION_ROUTE));

        Ok(())
    }

    #[tokio::test]
    async fn cart_change_withdraws_payment_request() -> TestResult {
        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().never();

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Online);

        checkout.confirm().await?;
        checkout.increment("burger")?;

        assert_eq!(checkout.state(), &CheckoutState::Editing);

        let result = checkout.approve(PaymentApproval::new("PAYPAL-42")).await;

        assert!(
            matches!(result, Err(CheckoutError::NotAwaitingPayment)),
            "expected NotAwaitingPayment, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn edited_delivery_is_validated_again_before_payment() -> TestResult {
        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().never();

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Online);

        checkout.confirm().await?;
        checkout.set_field(DeliveryField::Email, "");
        checkout.set_field(DeliveryField::Mobile, "12");

        assert!(!checkout.state().shows_payment_widget());
        assert!(checkout.approve(PaymentApproval::new("PAY-1")).await.is_err());

        let submission = checkout.confirm().await?;

        let Submission::Invalid(errors) = submission else {
            panic!("expected Invalid, got {submission:?}");
        };

        assert_eq!(errors.get(DeliveryField::Email), Some("Email is required"));
        assert_eq!(errors.get(DeliveryField::Mobile), Some("Invalid mobile number"));

        Ok(())
    }

    #[tokio::test]
    async fn reconfirming_after_cart_change_requests_new_amount() -> TestResult {
        let mut orders = MockOrdersApi::new();

        orders
            .expect_create_order()
            .once()
            .withf(|order| order.total_price == Decimal::from(35))
            .return_once(|_| Ok(OrderConfirmation::default()));

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Online);

        checkout.confirm().await?;
        checkout.increment("burger")?;

        let Submission::AwaitingPayment(request) = checkout.confirm().await? else {
            panic!("expected a payment request");
        };

        assert_eq!(request.amount_value(), "35.00");

        checkout.approve(PaymentApproval::new("PAYPAL-43")).await?;

        Ok(())
    }

    #[tokio::test]
    async fn settle_payment_feeds_gateway_result_back() -> TestResult {
        let mut orders = MockOrdersApi::new();

        orders
            .expect_create_order()
            .once()
            .withf(|order| order.payment_order_id.as_deref() == Some("PAYPAL-7"))
            .return_once(|_| Ok(OrderConfirmation::default()));

        let mut gateway = MockPaymentGateway::new();

        gateway
            .expect_request_approval()
            .once()
            .withf(|request| request.amount_value() == "25.00")
            .return_once(|_| Ok(PaymentApproval::new("PAYPAL-7")));

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Online);

        checkout.confirm().await?;
        checkout.settle_payment(&gateway).await?;

        assert!(matches!(checkout.state(), CheckoutState::Succeeded(_)));

        Ok(())
    }

    #[tokio::test]
    async fn cancelled_payment_creates_no_order() -> TestResult {
        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().never();

        let mut gateway = MockPaymentGateway::new();

        gateway
            .expect_request_approval()
            .once()
            .return_once(|_| Err(PaymentError::Cancelled));

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Online);

        checkout.confirm().await?;

        let result = checkout.settle_payment(&gateway).await;

        assert!(
            matches!(result, Err(CheckoutError::Payment(PaymentError::Cancelled))),
            "expected Payment(Cancelled), got {result:?}"
        );
        assert_eq!(checkout.state(), &CheckoutState::Failed);
        assert_eq!(
            checkout.order_error(),
            Some("Payment not completed: payment was cancelled")
        );

        Ok(())
    }

    #[tokio::test]
    async fn approve_without_pending_payment_errors() -> TestResult {
        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().never();

        let mut checkout = view(orders)?;

        let result = checkout.approve(PaymentApproval::new("PAYPAL-1")).await;

        assert!(
            matches!(result, Err(CheckoutError::NotAwaitingPayment)),
            "expected NotAwaitingPayment, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_submission_keeps_form_and_allows_retry() -> TestResult {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut orders = MockOrdersApi::new();

        orders.expect_create_order().times(2).returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(server_error())
            } else {
                Ok(OrderConfirmation::default())
            }
        });

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Cod);

        let first = checkout.confirm().await;

        assert!(
            matches!(first, Err(CheckoutError::Submission(_))),
            "expected Submission error, got {first:?}"
        );
        assert_eq!(checkout.state(), &CheckoutState::Failed);
        assert_eq!(
            checkout.order_error(),
            Some("Error saving order: request failed with status 500 Internal Server Error: boom")
        );
        assert_eq!(checkout.delivery(), &valid_delivery());
        assert_eq!(checkout.redirect(), None);

        checkout.confirm().await?;

        assert_eq!(checkout.order_error(), None);
        assert_eq!(checkout.redirect(), Some(CONFIRMATION_ROUTE));
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        Ok(())
    }

    #[tokio::test]
    async fn confirm_after_success_is_rejected() -> TestResult {
        let mut orders = MockOrdersApi::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Ok(OrderConfirmation::default()));

        let mut checkout = view(orders)?;
        checkout.select_payment(PaymentMethod::Cod);

        checkout.confirm().await?;

        let again = checkout.confirm().await;

        assert!(
            matches!(again, Err(CheckoutError::AlreadyPlaced)),
            "expected AlreadyPlaced, got {again:?}"
        );

        Ok(())
    }

    #[test]
    fn quantity_controls_adjust_total() -> TestResult {
        let mut checkout = view(MockOrdersApi::new())?;

        checkout.decrement("fries")?;
        checkout.increment("fries")?;

        assert_eq!(checkout.total()?, Money::from_minor(3000, iso::USD));

        Ok(())
    }

    #[test]
    fn set_field_by_name_rejects_unknown_fields() -> TestResult {
        let mut checkout = view(MockOrdersApi::new())?;

        checkout.set_field_by_name("scheduleDate", "2026-12-24")?;

        assert_eq!(checkout.delivery().schedule_date, "2026-12-24");
        assert!(checkout.set_field_by_name("postcode", "123").is_err());

        Ok(())
    }
}
