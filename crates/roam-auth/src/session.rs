//! Session state and change notifications.

use crate::user::User;
use crate::AuthError;
use serde::{Deserialize, Serialize};

/// An authenticated session issued by the hosted provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    /// Provider access token.
    pub access_token: String,
    /// The signed-in user.
    pub user: User,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp when the token expires.
    pub expires_at: i64,
}

impl AuthSession {
    /// Default session duration when the provider omits one: 1 hour.
    pub const DEFAULT_DURATION_SECS: i64 = 60 * 60;

    /// Create a session from a provider token.
    pub fn new(access_token: impl Into<String>, user: User, expires_in_secs: Option<i64>) -> Self {
        let now = current_timestamp();
        Self {
            access_token: access_token.into(),
            user,
            created_at: now,
            expires_at: now + expires_in_secs.unwrap_or(Self::DEFAULT_DURATION_SECS),
        }
    }

    /// Check if session is expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Validate the session, returning an error if expired.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.is_expired() {
            Err(AuthError::SessionExpired)
        } else {
            Ok(())
        }
    }

    /// Get time until expiration in seconds.
    pub fn time_to_expiry(&self) -> i64 {
        (self.expires_at - current_timestamp()).max(0)
    }
}

/// A session change the UI shell reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    /// A user signed in.
    SignedIn(User),
    /// The session ended.
    SignedOut,
}

/// Holder for the current optional session, emitting change events.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    session: Option<AuthSession>,
}

impl AuthState {
    /// Create signed-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session, if signed in.
    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    /// The current user; anonymous when signed out.
    pub fn user(&self) -> User {
        self.session
            .as_ref()
            .map(|s| s.user.clone())
            .unwrap_or_default()
    }

    /// Whether the current user may use the admin panel.
    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.user.is_admin() && !s.is_expired())
            .unwrap_or(false)
    }

    /// Install a new session, returning the change notification.
    pub fn set_session(&mut self, session: AuthSession) -> AuthEvent {
        let user = session.user.clone();
        self.session = Some(session);
        AuthEvent::SignedIn(user)
    }

    /// Drop the session, returning the change notification if one was
    /// active.
    pub fn clear(&mut self) -> Option<AuthEvent> {
        self.session.take().map(|_| AuthEvent::SignedOut)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roam_travel::ids::UserId;

    fn admin_user() -> User {
        User::authenticated(UserId::new("u-1"), "ops@roamtrips.in", None, true)
    }

    #[test]
    fn test_session_valid_until_expiry() {
        let session = AuthSession::new("tok", admin_user(), Some(3600));
        assert!(!session.is_expired());
        assert!(session.validate().is_ok());
        assert!(session.time_to_expiry() > 0);
    }

    #[test]
    fn test_expired_session() {
        let mut session = AuthSession::new("tok", admin_user(), Some(3600));
        session.expires_at = session.created_at - 1;
        assert!(session.is_expired());
        assert!(matches!(
            session.validate(),
            Err(AuthError::SessionExpired)
        ));
        assert_eq!(session.time_to_expiry(), 0);
    }

    #[test]
    fn test_state_emits_change_events() {
        let mut state = AuthState::new();
        assert!(state.clear().is_none());

        let event = state.set_session(AuthSession::new("tok", admin_user(), None));
        assert!(matches!(event, AuthEvent::SignedIn(_)));
        assert!(state.is_admin());

        assert_eq!(state.clear(), Some(AuthEvent::SignedOut));
        assert!(!state.user().is_authenticated());
    }

    #[test]
    fn test_expired_session_is_not_admin() {
        let mut state = AuthState::new();
        let mut session = AuthSession::new("tok", admin_user(), Some(3600));
        session.expires_at = session.created_at - 1;
        state.set_session(session);
        assert!(!state.is_admin());
    }
}
