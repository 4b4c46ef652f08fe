//! Storefront command line client

use std::{io, process};

use storefront_app::context::AppContext;
use tracing::error;

use crate::config::CliConfig;

mod commands;
mod config;
mod observability;

/// Storefront CLI entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    let context = AppContext::from_config(config.api.client_config(), config.api.session());

    if let Err(command_error) = config.command.run(&context, &mut io::stdout()).await {
        error!(error = ?command_error, "command failed");

        #[expect(
            clippy::print_stderr,
            reason = "the failure message is the command's user-facing output"
        )]
        {
            eprintln!("{command_error}");
        }

        process::exit(1);
    }
}
