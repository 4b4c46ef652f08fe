//! Profile errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("user id is not defined")]
    MissingUserId,

    #[error("profile is not being edited")]
    NotEditing,

    #[error("password change has not been started")]
    NotChangingPassword,

    #[error("current and new password are both required")]
    MissingPasswordFields,

    #[error("profile request failed")]
    Request(#[source] ApiError),
}

impl From<ApiError> for ProfileError {
    fn from(error: ApiError) -> Self {
        Self::Request(error)
    }
}
