//! App Context

use std::sync::Arc;

use storefront::cart::Cart;

use crate::{
    api::{ApiClient, ApiConfig, HttpOrdersApi, HttpUsersApi, OrdersApi, Session, UserId, UsersApi},
    checkout::CheckoutView,
    profile::ProfileView,
};

/// The API resources the views share.
#[derive(Clone)]
pub struct AppContext {
    pub orders: Arc<dyn OrdersApi>,
    pub users: Arc<dyn UsersApi>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build the HTTP-backed context for a session.
    #[must_use]
    pub fn from_config(config: ApiConfig, session: Session) -> Self {
        let client = ApiClient::new(config, session);

        Self {
            orders: Arc::new(HttpOrdersApi::new(client.clone())),
            users: Arc::new(HttpUsersApi::new(client)),
        }
    }

    /// Open a checkout for a cart.
    #[must_use]
    pub fn checkout(&self, cart: Cart) -> CheckoutView {
        CheckoutView::new(cart, Arc::clone(&self.orders))
    }

    /// Open the profile page for a user.
    #[must_use]
    pub fn profile(&self, user_id: Option<UserId>) -> ProfileView {
        ProfileView::new(user_id, Arc::clone(&self.users), Arc::clone(&self.orders))
    }
}
