//! Domain service for account registration and login.

use thiserror::Error;

use crate::models::{NewUser, User};
use crate::store::StoreError;

/// Errors specific to authentication operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists")]
    UsernameTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken => Self::UsernameTaken,
            StoreError::InvalidCredentials => Self::InvalidCredentials,
        }
    }
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UsernameTaken`] if the username is already registered.
    async fn signup(&self, candidate: NewUser) -> Result<User, AuthError>;

    /// Verifies credentials and returns the stored user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown username or a
    /// wrong password alike.
    async fn login(&self, username: &str, password: &str) -> Result<User, AuthError>;
}
