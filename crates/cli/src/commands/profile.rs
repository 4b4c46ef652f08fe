//! `storefront profile`

use std::io;

use clap::{Args, Subcommand};
use jiff::tz::TimeZone;
use storefront::pricing::format_amount;
use storefront_app::{
    api::{OrderSummary, UserId},
    context::AppContext,
    profile::{ProfileError, ProfileView},
};

use crate::commands::CommandError;

/// Arguments of `storefront profile`.
#[derive(Debug, Args)]
pub struct ProfileCommand {
    /// User whose profile to open
    #[arg(long, env = "STOREFRONT_USER_ID", global = true)]
    pub user_id: Option<String>,

    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

/// Profile subcommands.
#[derive(Debug, Subcommand)]
pub enum ProfileSubcommand {
    /// Show the profile and order history.
    Show,

    /// Change the name or email.
    Update(UpdateArgs),

    /// Change the password.
    ChangePassword(ChangePasswordArgs),
}

/// Arguments of `storefront profile update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,
}

/// Arguments of `storefront profile change-password`.
#[derive(Debug, Args)]
pub struct ChangePasswordArgs {
    /// The password currently set
    #[arg(long, env = "STOREFRONT_CURRENT_PASSWORD", hide_env_values = true, default_value = "")]
    pub current_password: String,

    /// The replacement password
    #[arg(long, env = "STOREFRONT_NEW_PASSWORD", hide_env_values = true, default_value = "")]
    pub new_password: String,
}

pub(crate) async fn run(
    command: ProfileCommand,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    let mut view = context.profile(command.user_id.map(UserId::from));

    match command.command {
        ProfileSubcommand::Show => show(&mut view, out).await,
        ProfileSubcommand::Update(args) => update(&mut view, args, out).await,
        ProfileSubcommand::ChangePassword(args) => change_password(&mut view, args, out).await,
    }
}

async fn show(view: &mut ProfileView, out: &mut impl io::Write) -> Result<(), CommandError> {
    view.load()
        .await
        .map_err(|source| page_error(view.error(), source))?;

    let profile = view.profile();

    writeln!(out, "name: {}", profile.display_name())?;
    writeln!(out, "email: {}", profile.email)?;

    if view.orders().is_empty() {
        writeln!(out, "no orders yet")?;
    }

    for order in view.orders() {
        writeln!(out, "{}", order_row(order))?;
    }

    Ok(())
}

async fn update(
    view: &mut ProfileView,
    args: UpdateArgs,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    view.load()
        .await
        .map_err(|source| page_error(view.error(), source))?;

    view.begin_edit();

    if let Some(name) = args.name {
        view.set_name(name)
            .map_err(|source| page_error(None, source))?;
    }

    if let Some(email) = args.email {
        view.set_email(email)
            .map_err(|source| page_error(None, source))?;
    }

    view.save()
        .await
        .map_err(|source| page_error(view.error(), source))?;

    if let Some(notice) = view.notice() {
        writeln!(out, "{notice}")?;
    }

    Ok(())
}

async fn change_password(
    view: &mut ProfileView,
    args: ChangePasswordArgs,
    out: &mut impl io::Write,
) -> Result<(), CommandError> {
    view.begin_password_change();
    view.set_current_password(args.current_password);
    view.set_new_password(args.new_password);

    view.change_password()
        .await
        .map_err(|source| page_error(view.password_error(), source))?;

    if let Some(notice) = view.notice() {
        writeln!(out, "{notice}")?;
    }

    Ok(())
}

fn order_row(order: &OrderSummary) -> String {
    let date = order.date.map_or_else(
        || "-".to_string(),
        |date| date.to_zoned(TimeZone::UTC).date().to_string(),
    );

    format!(
        "order {}  total {}  date {date}",
        order.id,
        format_amount(order.total_price)
    )
}

fn page_error(message: Option<&str>, source: ProfileError) -> CommandError {
    CommandError::Profile {
        message: message.map_or_else(|| source.to_string(), str::to_string),
        source,
    }
}
