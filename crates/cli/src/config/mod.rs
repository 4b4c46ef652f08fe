//! CLI configuration module

use clap::Parser;

use crate::{
    commands::Command,
    config::{api::ApiSettings, observability::LoggingConfig},
};

pub(crate) mod api;
pub(crate) mod observability;

pub(crate) use observability::LogFormat;

/// Storefront command line client configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront command line client", long_about = None)]
pub struct CliConfig {
    /// Storefront API settings.
    #[command(flatten)]
    pub api: ApiSettings,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_point_at_local_api() -> TestResult {
        let config = CliConfig::try_parse_from(["storefront", "profile", "show"])?;

        assert_eq!(config.api.api_url, "http://localhost:3001");
        assert!(matches!(config.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn checkout_collects_repeated_adjustments() -> TestResult {
        let config = CliConfig::try_parse_from([
            "storefront",
            "--api-url",
            "http://shop.test",
            "checkout",
            "order.yaml",
            "--increment",
            "burger",
            "--increment",
            "burger",
            "--decrement",
            "fries",
        ])?;

        let Command::Checkout(args) = config.command else {
            panic!("expected checkout command");
        };

        assert_eq!(config.api.api_url, "http://shop.test");
        assert_eq!(args.increment, ["burger", "burger"]);
        assert_eq!(args.decrement, ["fries"]);
        assert_eq!(args.payment_order_id, None);

        Ok(())
    }
}
