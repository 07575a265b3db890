//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Session expired.
    #[error("session expired")]
    SessionExpired,

    /// No active session.
    #[error("not signed in")]
    NotSignedIn,

    /// The provider rejected the token.
    #[error("token verification failed: {0}")]
    VerifyFailed(String),

    /// The signed-in user is not an administrator.
    #[error("administrator access required")]
    NotAdmin,

    /// Transport or store error.
    #[error("store error: {0}")]
    Store(#[from] roam_data::StoreError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuthError {
    /// Check if this is an authentication failure (as opposed to a
    /// transport problem).
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials
                | AuthError::SessionExpired
                | AuthError::NotSignedIn
                | AuthError::VerifyFailed(_)
        )
    }
}
