//! API Config

use clap::Args;
use storefront_app::api::{ApiConfig, Session};

/// Storefront API connection settings.
#[derive(Debug, Args)]
pub struct ApiSettings {
    /// Storefront API base address
    #[arg(long, env = "STOREFRONT_API_URL", default_value = "http://localhost:3001")]
    pub api_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "STOREFRONT_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,
}

impl ApiSettings {
    /// Client configuration for these settings.
    pub fn client_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
        }
    }

    /// Session carrying the configured token, if any.
    pub fn session(&self) -> Session {
        self.api_token
            .as_deref()
            .map_or_else(Session::anonymous, Session::with_token)
    }
}
