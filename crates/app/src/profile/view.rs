//! Profile view.

use std::{fmt, sync::Arc};

use tracing::{info, instrument, warn};

use crate::{
    api::{OrderSummary, OrdersApi, PasswordChange, UserId, UserProfile, UsersApi},
    profile::ProfileError,
};

/// Shown when the page is opened without a user id.
pub const MISSING_USER_ID: &str = "User ID is not defined.";
/// Shown when the profile or order history cannot be fetched.
pub const LOAD_FAILED: &str = "Error fetching profile or order data. Please try again.";
/// Notice after a successful profile save.
pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
/// Shown when a profile save is rejected.
pub const UPDATE_FAILED: &str = "Error updating profile. Please try again.";
/// Shown when either password field is blank.
pub const FIELDS_REQUIRED: &str = "Both fields are required.";
/// Notice after a successful password change.
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";
/// Shown when a password change is rejected.
pub const CHANGE_PASSWORD_FAILED: &str = "Error changing password. Please try again.";

/// State behind the profile page: the user record, their order history, and
/// the edit and password-change sub-flows.
pub struct ProfileView {
    user_id: Option<UserId>,
    users: Arc<dyn UsersApi>,
    orders: Arc<dyn OrdersApi>,
    profile: UserProfile,
    saved: UserProfile,
    order_history: Vec<OrderSummary>,
    loading: bool,
    editing: bool,
    changing_password: bool,
    current_password: String,
    new_password: String,
    error: Option<String>,
    password_error: Option<String>,
    notice: Option<String>,
}

impl fmt::Debug for ProfileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileView")
            .field("user_id", &self.user_id)
            .field("profile", &self.profile)
            .field("order_history", &self.order_history.len())
            .field("loading", &self.loading)
            .field("editing", &self.editing)
            .field("changing_password", &self.changing_password)
            .field("error", &self.error)
            .field("password_error", &self.password_error)
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

impl ProfileView {
    /// Open the profile page for a user, before anything is fetched.
    #[must_use]
    pub fn new(
        user_id: Option<UserId>,
        users: Arc<dyn UsersApi>,
        orders: Arc<dyn OrdersApi>,
    ) -> Self {
        Self {
            user_id,
            users,
            orders,
            profile: UserProfile::default(),
            saved: UserProfile::default(),
            order_history: Vec::new(),
            loading: true,
            editing: false,
            changing_password: false,
            current_password: String::new(),
            new_password: String::new(),
            error: None,
            password_error: None,
            notice: None,
        }
    }

    /// The user the page was opened for.
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// The profile as currently shown, including unsaved edits.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Order history from the last load.
    pub fn orders(&self) -> &[OrderSummary] {
        &self.order_history
    }

    /// Whether a load is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the edit form is open.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether the password form is open.
    pub fn is_changing_password(&self) -> bool {
        self.changing_password
    }

    /// Page-level error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Error message of the password-change form.
    pub fn password_error(&self) -> Option<&str> {
        self.password_error.as_deref()
    }

    /// Confirmation message from the last successful save or password change.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Fetch the profile, then the user's orders.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::MissingUserId`] without a user id, or the first
    /// request error. Either way the page error is set and loading ends.
    #[instrument(skip(self), fields(user_id = ?self.user_id))]
    pub async fn load(&mut self) -> Result<(), ProfileError> {
        let result = self.fetch().await;

        self.loading = false;

        match &result {
            Ok(()) => {
                info!(orders = self.order_history.len(), "profile loaded");
            }
            Err(ProfileError::MissingUserId) => {
                self.error = Some(MISSING_USER_ID.to_string());
            }
            Err(error) => {
                warn!(%error, "failed to load profile");

                self.error = Some(LOAD_FAILED.to_string());
            }
        }

        result
    }

    async fn fetch(&mut self) -> Result<(), ProfileError> {
        let user = self.require_user()?;

        self.profile = self.users.get_profile(user.clone()).await?;
        self.saved = self.profile.clone();

        self.order_history = self.orders.orders_for_user(user).await?;

        Ok(())
    }

    /// Start editing the profile.
    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Leave editing mode, discarding unsaved edits.
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.profile = self.saved.clone();
        self.cancel_password_change();
    }

    /// Change the profile's name.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotEditing`] outside editing mode.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ProfileError> {
        self.editable()?.name = name.into();

        Ok(())
    }

    /// Change the profile's email.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotEditing`] outside editing mode.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ProfileError> {
        self.editable()?.email = email.into();

        Ok(())
    }

    fn editable(&mut self) -> Result<&mut UserProfile, ProfileError> {
        if self.editing {
            Ok(&mut self.profile)
        } else {
            Err(ProfileError::NotEditing)
        }
    }

    /// Write the whole profile back.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotEditing`] outside editing mode,
    /// [`ProfileError::MissingUserId`] without a user id, or the request error.
    /// On a failed request the page error is set and editing continues.
    #[instrument(skip(self), fields(user_id = ?self.user_id))]
    pub async fn save(&mut self) -> Result<(), ProfileError> {
        if !self.editing {
            return Err(ProfileError::NotEditing);
        }

        let user = self.require_user()?;

        match self.users.update_profile(user, self.profile.clone()).await {
            Ok(()) => {
                info!("profile saved");

                self.saved = self.profile.clone();
                self.editing = false;
                self.error = None;
                self.notice = Some(PROFILE_UPDATED.to_string());

                Ok(())
            }
            Err(error) => {
                warn!(%error, "failed to save profile");

                self.error = Some(UPDATE_FAILED.to_string());

                Err(error.into())
            }
        }
    }

    /// Open the password-change form.
    pub fn begin_password_change(&mut self) {
        self.changing_password = true;
        self.password_error = None;
    }

    /// Close the password-change form and forget what was typed.
    pub fn cancel_password_change(&mut self) {
        self.changing_password = false;
        self.current_password.clear();
        self.new_password.clear();
    }

    /// Fill in the current password field.
    pub fn set_current_password(&mut self, password: impl Into<String>) {
        self.current_password = password.into();
    }

    /// Fill in the new password field.
    pub fn set_new_password(&mut self, password: impl Into<String>) {
        self.new_password = password.into();
    }

    /// Submit the password-change form.
    ///
    /// Both fields must be filled in; otherwise nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::NotChangingPassword`] when the form is closed,
    /// [`ProfileError::MissingPasswordFields`] when a field is empty,
    /// [`ProfileError::MissingUserId`] without a user id, or the request error.
    #[instrument(skip(self), fields(user_id = ?self.user_id))]
    pub async fn change_password(&mut self) -> Result<(), ProfileError> {
        if !self.changing_password {
            return Err(ProfileError::NotChangingPassword);
        }

        if self.current_password.is_empty() || self.new_password.is_empty() {
            self.password_error = Some(FIELDS_REQUIRED.to_string());

            return Err(ProfileError::MissingPasswordFields);
        }

        let user = self.require_user()?;

        let change = PasswordChange {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        };

        match self.users.change_password(user, change).await {
            Ok(message) => {
                info!("password changed");

                self.password_error = None;
                self.notice = Some(message.unwrap_or_else(|| PASSWORD_CHANGED.to_string()));
                self.cancel_password_change();

                Ok(())
            }
            Err(error) => {
                warn!(%error, "failed to change password");

                self.password_error = Some(CHANGE_PASSWORD_FAILED.to_string());

                Err(error.into())
            }
        }
    }

    fn require_user(&self) -> Result<UserId, ProfileError> {
        self.user_id.clone().ok_or(ProfileError::MissingUserId)
    }
}
