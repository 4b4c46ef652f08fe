//! Users resource.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, instrument};

use crate::api::{
    ApiError, UserId,
    client::{ApiClient, ensure_success, read_json, read_text},
    models::{PasswordChange, UserProfile, message_from},
};

/// User endpoints of the storefront API.
#[automock]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetch a profile (`GET /api/users/profile/:id`).
    async fn get_profile(&self, user: UserId) -> Result<UserProfile, ApiError>;

    /// Write a profile back in full (`PUT /api/users/profile/:id`).
    async fn update_profile(&self, user: UserId, profile: UserProfile) -> Result<(), ApiError>;

    /// Change a password (`PUT /api/users/change-password/:id`).
    ///
    /// Returns the server's message, if it sent one.
    async fn change_password(
        &self,
        user: UserId,
        change: PasswordChange,
    ) -> Result<Option<String>, ApiError>;
}

/// [`UsersApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    client: ApiClient,
}

impl HttpUsersApi {
    /// Create the resource on top of a shared client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    #[instrument(skip(self))]
    async fn get_profile(&self, user: UserId) -> Result<UserProfile, ApiError> {
        let response = self
            .client
            .get(&format!("/api/users/profile/{user}"))
            .send()
            .await?;

        read_json(response).await
    }

    #[instrument(skip(self, profile))]
    async fn update_profile(&self, user: UserId, profile: UserProfile) -> Result<(), ApiError> {
        let response = self
            .client
            .put(&format!("/api/users/profile/{user}"))
            .json(&profile)
            .send()
            .await?;

        ensure_success(response).await?;

        debug!("profile updated");

        Ok(())
    }

    #[instrument(skip(self, change))]
    async fn change_password(
        &self,
        user: UserId,
        change: PasswordChange,
    ) -> Result<Option<String>, ApiError> {
        let response = self
            .client
            .put(&format!("/api/users/change-password/{user}"))
            .json(&change)
            .send()
            .await?;

        let (_status, body) = read_text(response).await?;

        Ok(message_from(&body))
    }
}
