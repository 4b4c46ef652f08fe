//! Subcommands

use std::io;

use clap::Subcommand;
use storefront::fixtures::FixtureError;
use storefront_app::{checkout::CheckoutError, context::AppContext, profile::ProfileError};
use thiserror::Error;

pub(crate) mod checkout;
pub(crate) mod profile;

/// Storefront subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check out a cart described in a YAML file.
    Checkout(checkout::CheckoutArgs),

    /// Show or change a user's profile.
    Profile(profile::ProfileCommand),
}

/// Errors raised by subcommands.
#[derive(Debug, Error)]
pub(crate) enum CommandError {
    /// The checkout file could not be loaded.
    #[error("failed to load checkout: {0}")]
    Fixture(#[from] FixtureError),

    /// Delivery details failed validation.
    #[error("delivery details are invalid ({0} problems)")]
    Invalid(usize),

    /// The checkout rejected the request.
    #[error("{message}")]
    Checkout {
        message: String,
        #[source]
        source: CheckoutError,
    },

    /// The profile page reported an error.
    #[error("{message}")]
    Profile {
        message: String,
        #[source]
        source: ProfileError,
    },

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl Command {
    /// Run the command, writing its report to `out`.
    pub(crate) async fn run(
        self,
        context: &AppContext,
        out: &mut impl io::Write,
    ) -> Result<(), CommandError> {
        match self {
            Command::Checkout(args) => checkout::run(args, context, out).await,
            Command::Profile(command) => profile::run(command, context, out).await,
        }
    }
}
