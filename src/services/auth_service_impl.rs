//! Record-store implementation of the `AuthService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::{NewUser, User};
use crate::services::auth_service::{AuthError, AuthService};
use crate::store::RecordStore;

pub struct StoreAuthService {
    store: Arc<RecordStore>,
}

impl StoreAuthService {
    #[must_use]
    pub const fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthService for StoreAuthService {
    async fn signup(&self, candidate: NewUser) -> Result<User, AuthError> {
        let username = candidate.username.clone();

        match self.store.register(candidate) {
            Ok(user) => {
                metrics::counter!("users_registered_total").increment(1);
                info!(user_id = user.id, username = %user.username, "User registered");
                Ok(user)
            }
            Err(e) => {
                debug!(username = %username, "Signup rejected: {e}");
                Err(e.into())
            }
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        match self.store.authenticate(username, password) {
            Ok(user) => {
                metrics::counter!("logins_total", "outcome" => "success").increment(1);
                info!(user_id = user.id, username = %user.username, "User logged in");
                Ok(user)
            }
            Err(e) => {
                metrics::counter!("logins_total", "outcome" => "failure").increment(1);
                debug!(username = %username, "Login rejected");
                Err(e.into())
            }
        }
    }
}
