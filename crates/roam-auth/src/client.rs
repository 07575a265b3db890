//! Thin client for the hosted auth provider.
//!
//! Sign-in exchanges a credential pair for a token, verification is a
//! single endpoint plus the profile's admin flag. There is no local
//! credential handling beyond passing the pair through.

use crate::{AuthError, AuthSession, User};
use roam_data::{Method, RowQuery, StoreClient};
use roam_travel::ids::UserId;
use serde::{Deserialize, Serialize};

/// Auth provider client, sharing the store host.
pub struct AuthClient {
    base_url: String,
    api_key: String,
}

/// Token response from the provider.
#[derive(Debug, Clone, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<ProviderUser>,
}

/// The provider's identity record.
#[derive(Debug, Clone, Deserialize)]
struct ProviderUser {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// Profile row carrying the admin flag.
#[derive(Debug, Clone, Default, Deserialize)]
struct ProfileRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    is_admin: Option<bool>,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl AuthClient {
    /// Create a client for a provider instance.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Sign in with a credential pair.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let body = serde_json::to_vec(&Credentials { email, password })?;
        let response = self.store().request(
            Method::Post,
            "/auth/v1/token?grant_type=password",
            Some("application/json"),
            Some(body),
        )?;

        if matches!(response.status, 400 | 401 | 403) {
            return Err(AuthError::InvalidCredentials);
        }
        let token: TokenResponse = response.error_for_status()?.json()?;

        let provider_user = token
            .user
            .ok_or_else(|| AuthError::VerifyFailed("token response had no user".to_string()))?;
        let user = self.resolve_user(provider_user)?;

        Ok(AuthSession::new(token.access_token, user, token.expires_in))
    }

    /// Verify an access token against the provider and return the
    /// signed-in user with the profile's admin flag.
    pub fn verify(&self, access_token: &str) -> Result<User, AuthError> {
        let response =
            self.store_as(access_token)
                .request(Method::Get, "/auth/v1/user", None, None)?;
        if !response.is_success() {
            return Err(AuthError::VerifyFailed(format!(
                "provider returned status {}",
                response.status
            )));
        }
        let provider_user: ProviderUser = response.json()?;
        self.resolve_user(provider_user)
    }

    /// End the session at the provider. Best effort; the local session
    /// is dropped regardless.
    pub fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.store_as(access_token)
            .request(Method::Post, "/auth/v1/logout", None, None)?;
        Ok(())
    }

    /// Combine the provider identity with the profile row.
    fn resolve_user(&self, provider_user: ProviderUser) -> Result<User, AuthError> {
        let id = provider_user
            .id
            .ok_or_else(|| AuthError::VerifyFailed("identity had no id".to_string()))?;
        let email = provider_user.email.unwrap_or_default();
        let profile = self.fetch_profile(&id)?;

        Ok(User::authenticated(
            UserId::new(id),
            email,
            profile.name,
            profile.is_admin.unwrap_or(false),
        ))
    }

    /// Fetch the profile row; a missing profile means a regular
    /// customer account.
    fn fetch_profile(&self, user_id: &str) -> Result<ProfileRow, AuthError> {
        let query = RowQuery::new("profiles")
            .select("name,is_admin")
            .eq("id", user_id)
            .limit(1);
        let rows: Vec<ProfileRow> = self.store().get_rows(&query)?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    /// Store client under the anonymous key.
    fn store(&self) -> StoreClient {
        StoreClient::new(self.base_url.clone(), self.api_key.clone())
    }

    /// Store client acting as the token's user.
    fn store_as(&self, access_token: &str) -> StoreClient {
        self.store().with_bearer(access_token)
    }
}
