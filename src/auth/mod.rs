//! Authentication — credentials, auth state, login/register/logout wire types.
//!
//! ## Session Model
//!
//! The backend issues an opaque bearer token on login or register. The client
//! persists it through the [`SessionStore`](crate::session::SessionStore) and
//! the request pipeline attaches it to every call. A stored token is only a
//! claim: the session counts as valid once an authenticated call succeeds.
//!
//! ## Session Hydration
//!
//! On load, `client.auth().silent_login()` checks the stored token against
//! `GET /api/profile`. Any failure is treated as an expired session: the token
//! is cleared and the user sees the login form.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

use crate::domain::profile::Profile;
use crate::error::SdkError;

// ============================================================================
// Auth state
// ============================================================================

/// Where the client is in the login lifecycle.
///
/// Allowed transitions: `LoggedOut → Authenticating → LoggedIn | LoggedOut`
/// and `LoggedIn → LoggedOut`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    LoggedOut,
    Authenticating,
    LoggedIn {
        username: String,
    },
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { username } => Some(username),
            _ => None,
        }
    }

    pub fn can_transition_to(&self, next: &AuthState) -> bool {
        matches!(
            (self, next),
            (Self::LoggedOut, Self::Authenticating)
                | (Self::Authenticating, Self::LoggedIn { .. })
                | (Self::Authenticating, Self::LoggedOut)
                | (Self::LoggedIn { .. }, Self::LoggedOut)
        )
    }
}

impl std::fmt::Display for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoggedOut => write!(f, "logged out"),
            Self::Authenticating => write!(f, "authenticating"),
            Self::LoggedIn { username } => write!(f, "logged in as {}", username),
        }
    }
}

/// Which credential endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Register,
}

impl AuthKind {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => crate::network::LOGIN_PATH,
            Self::Register => crate::network::REGISTER_PATH,
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Login / register request body.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub const MISSING_FIELDS: &'static str = "Enter username and password.";

    /// Trims the username and requires both fields to be non-empty.
    pub fn new(username: &str, password: &str) -> Result<Self, SdkError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(SdkError::Validation(Self::MISSING_FIELDS.to_string()));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login / register response. Both fields are optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Logout request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_fields() {
        assert!(matches!(
            Credentials::new("", "x"),
            Err(SdkError::Validation(_))
        ));
        assert!(matches!(
            Credentials::new("x", ""),
            Err(SdkError::Validation(_))
        ));
        assert!(matches!(
            Credentials::new("   ", "x"),
            Err(SdkError::Validation(_))
        ));
    }

    #[test]
    fn test_credentials_trim_username_only() {
        let c = Credentials::new("  ada ", " pw ").unwrap();
        assert_eq!(c.username, "ada");
        assert_eq!(c.password, " pw ");
        assert!(!format!("{:?}", c).contains("pw"));
    }

    #[test]
    fn test_transitions() {
        let logged_in = AuthState::LoggedIn {
            username: "ada".into(),
        };
        assert!(AuthState::LoggedOut.can_transition_to(&AuthState::Authenticating));
        assert!(AuthState::Authenticating.can_transition_to(&logged_in));
        assert!(AuthState::Authenticating.can_transition_to(&AuthState::LoggedOut));
        assert!(logged_in.can_transition_to(&AuthState::LoggedOut));

        assert!(!AuthState::LoggedOut.can_transition_to(&logged_in));
        assert!(!logged_in.can_transition_to(&AuthState::Authenticating));
        assert!(!AuthState::Authenticating.can_transition_to(&AuthState::Authenticating));
    }

    #[test]
    fn test_auth_response_tolerates_missing_token() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"profile": {"username": "ada"}}"#).unwrap();
        assert!(resp.token.is_none());
        assert_eq!(resp.profile.unwrap().username, "ada");
    }
}
