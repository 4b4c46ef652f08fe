//! HTTP client shared by the storefront API resources.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{ApiError, Session};

/// Configuration for connecting to the storefront API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base address, e.g. `"http://localhost:3001"`.
    pub base_url: String,
}

/// HTTP client for the storefront REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
    http: Client,
}

impl ApiClient {
    /// Create a new client from the given configuration and session.
    #[must_use]
    pub fn new(config: ApiConfig, session: Session) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            http: Client::new(),
        }
    }

    /// Absolute URL for an API path such as `/api/orders/create`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// The session requests are made with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.put(self.url(path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Reject non-2xx responses, keeping the body text for diagnostics.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    debug!(%status, "request rejected");

    Err(ApiError::UnexpectedStatus { status, body })
}

/// Read a successful response body as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;

    Ok(response.json().await?)
}

/// Read a successful response body as text, with its status.
pub(crate) async fn read_text(response: Response) -> Result<(StatusCode, String), ApiError> {
    let response = ensure_success(response).await?;
    let status = response.status();

    Ok((status, response.text().await?))
}
