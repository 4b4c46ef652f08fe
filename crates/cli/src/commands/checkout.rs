//! `storefront checkout`

use std::{io, path::PathBuf};

use async_trait::async_trait;
use clap::Args;
use storefront::fixtures::{CheckoutFixture, CheckoutParts};
use storefront_app::{
    checkout::{CheckoutError, CheckoutView, Submission},
    context::AppContext,
    payment::{PaymentApproval, PaymentError, PaymentGateway, PaymentRequest},
};
use tracing::info;

use crate::commands::CommandError;

/// Arguments of `storefront checkout`.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// YAML file describing the cart, delivery details and payment choice
    pub fixture: PathBuf,

    /// Add one of an item before checking out (repeatable)
    #[arg(long, value_name = "ITEM_ID")]
    pub increment: Vec<String>,

    /// Remove one of an item before checking out (repeatable)
    #[arg(long, value_name = "ITEM_ID")]
    pub decrement: Vec<String>,

    /// Payment order id to approve online payments with; without it the
    /// payment is treated as cancelled
    #[arg(long)]
    pub payment_order_id: Option<String>,
}

/// Payment widget stand-in that approves with a fixed order id.
#[derive(Debug)]
struct PresetApproval {
    order_id: Option<String>,
}

#[async_trait]
impl PaymentGateway for PresetApproval {
    async fn request_approval(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentApproval, PaymentError> {
        info!(
            amount = %request.amount_value(),
            currency = request.currency_code(),
            "payment approval requested"
        );

        self.order_id
            .clone()
            .map(PaymentApproval::new)
            .ok_or(PaymentError::Cancelled)
    }
}

pub(crate) async fn run(
    args: CheckoutArgs,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let parts = CheckoutFixture::load(&args.fixture)?.into_parts()?;

    checkout(parts, args, context, out).await
}

async fn checkout(
    parts: CheckoutParts,
    args: CheckoutArgs,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let mut view = context.checkout(parts.cart).with_delivery(parts.delivery);

    view.select_payment(parts.payment_method);

    for id in &args.increment {
        view.increment(id).map_err(|source| rejected(&view, source))?;
    }

    for id in &args.decrement {
        view.decrement(id).map_err(|source| rejected(&view, source))?;
    }

    for item in view.cart().items() {
        writeln!(out, "{} x{} @ {}", item.name, item.quantity, item.price)?;
    }

    let total = view.total().map_err(|source| rejected(&view, source.into()))?;

    writeln!(out, "total: {total}")?;
    writeln!(out, "payment: {}", view.payment_method())?;

    let submission = view
        .confirm()
        .await
        .map_err(|source| rejected(&view, source))?;

    let confirmation = match submission {
        Submission::Invalid(errors) => {
            for (field, message) in errors.iter() {
                writeln!(out, "{field}: {message}")?;
            }

            return Err(CommandError::Invalid(errors.len()));
        }
        Submission::AwaitingPayment(request) => {
            writeln!(
                out,
                "payment requested: {} {}",
                request.amount_value(),
                request.currency_code()
            )?;

            let gateway = PresetApproval {
                order_id: args.payment_order_id,
            };

            view.settle_payment(&gateway)
                .await
                .map_err(|source| rejected(&view, source))?
        }
        Submission::Placed(confirmation) => confirmation,
    };

    if let Some(message) = &confirmation.message {
        writeln!(out, "{message}")?;
    }

    if let Some(order_id) = &confirmation.order_id {
        writeln!(out, "order: {order_id}")?;
    }

    if let Some(route) = view.redirect() {
        writeln!(out, "redirect: {route}")?;
    }

    Ok(())
}

fn rejected(view: &CheckoutView, source: CheckoutError) -> CommandError {
    CommandError::Checkout {
        message: view
            .order_error()
            .map_or_else(|| source.to_string(), str::to_string),
        source,
    }
}
