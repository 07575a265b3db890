//! User types.

use roam_travel::ids::UserId;
use serde::{Deserialize, Serialize};

/// A user in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum User {
    /// Anonymous visitor.
    Anonymous,
    /// Authenticated user.
    Authenticated {
        /// User ID.
        id: UserId,
        /// Email address.
        email: String,
        /// Display name, if set on the profile.
        name: Option<String>,
        /// Whether the profile carries the administrator flag.
        is_admin: bool,
    },
}

impl User {
    /// Create a new authenticated user.
    pub fn authenticated(
        id: UserId,
        email: impl Into<String>,
        name: Option<String>,
        is_admin: bool,
    ) -> Self {
        User::Authenticated {
            id,
            email: email.into(),
            name,
            is_admin,
        }
    }

    /// Check if user is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, User::Authenticated { .. })
    }

    /// Check if the user may use the admin panel.
    pub fn is_admin(&self) -> bool {
        matches!(self, User::Authenticated { is_admin: true, .. })
    }

    /// Get user ID if authenticated.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            User::Authenticated { id, .. } => Some(id),
            User::Anonymous => None,
        }
    }

    /// Get email if authenticated.
    pub fn email(&self) -> Option<&str> {
        match self {
            User::Authenticated { email, .. } => Some(email),
            User::Anonymous => None,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &str {
        match self {
            User::Authenticated { name, email, .. } => name.as_deref().unwrap_or(email.as_str()),
            User::Anonymous => "Guest",
        }
    }
}

impl Default for User {
    fn default() -> Self {
        User::Anonymous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_defaults() {
        let user = User::default();
        assert!(!user.is_authenticated());
        assert!(!user.is_admin());
        assert_eq!(user.display_name(), "Guest");
    }

    #[test]
    fn test_admin_flag() {
        let admin = User::authenticated(UserId::new("u-1"), "ops@roamtrips.in", None, true);
        assert!(admin.is_admin());
        let customer =
            User::authenticated(UserId::new("u-2"), "traveller@example.com", None, false);
        assert!(!customer.is_admin());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let named = User::authenticated(
            UserId::new("u-1"),
            "ops@roamtrips.in",
            Some("Asha".to_string()),
            true,
        );
        assert_eq!(named.display_name(), "Asha");
        let unnamed = User::authenticated(UserId::new("u-2"), "ops@roamtrips.in", None, true);
        assert_eq!(unnamed.display_name(), "ops@roamtrips.in");
    }
}
