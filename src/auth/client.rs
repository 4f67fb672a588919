//! Auth sub-client — silent login, login, register, logout.

use crate::auth::{AuthKind, AuthResponse, AuthState, Credentials, LogoutRequest};
use crate::client::GameClient;
use crate::domain::profile::wire::ProfileResponse;
use crate::domain::profile::Profile;
use crate::error::SdkError;
use crate::network::{LOGOUT_PATH, PROFILE_PATH};
use crate::render::StatusLine;

/// Shown when a stored token is rejected on load.
pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

/// Returned when a logout lands while a login request is still in flight.
pub const LOGIN_CANCELLED: &str = "Login cancelled.";

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a GameClient,
}

impl<'a> Auth<'a> {
    /// Re-authenticate from the stored token, if any.
    ///
    /// - No stored token: logged-out rendering, no network call.
    /// - Token accepted by `GET /api/profile`: `LoggedIn`, profile rendered.
    /// - Any failure: token cleared, `LoggedOut`, "session expired" status.
    ///   Transient faults are not told apart from expiry.
    ///
    /// Only acts from `LoggedOut`; otherwise the current state is returned.
    pub async fn silent_login(&self) -> AuthState {
        let current = self.state().await;
        if current != AuthState::LoggedOut {
            tracing::debug!(state = %current, "silent login skipped");
            return current;
        }

        if !self.client.http.session().has_token() {
            self.client.renderer.logged_out();
            return AuthState::LoggedOut;
        }

        if !self.transition(AuthState::Authenticating).await {
            return self.state().await;
        }

        match self.client.http.get::<ProfileResponse>(PROFILE_PATH).await {
            Ok(resp) => {
                let profile = resp.profile.unwrap_or_default();
                match self.enter_logged_in(&profile, "", None).await {
                    Some(state) => {
                        self.client.status(StatusLine::neutral("Logged in."));
                        state
                    }
                    None => self.state().await,
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "stored session rejected");
                self.client.http.session().clear();
                self.enter_logged_out().await;
                self.client.status(StatusLine::error(SESSION_EXPIRED));
                AuthState::LoggedOut
            }
        }
    }

    /// Log in with username and password. See [`Auth::register`].
    pub async fn login(&self, username: &str, password: &str) -> Result<Profile, SdkError> {
        self.authenticate(AuthKind::Login, username, password).await
    }

    /// Create an account and log into it.
    ///
    /// Both fields are required (the username is trimmed); missing fields
    /// fail locally without a request. On success the returned token is
    /// stored and the profile rendered. On failure the server's message is
    /// shown verbatim and the client stays logged out.
    pub async fn register(&self, username: &str, password: &str) -> Result<Profile, SdkError> {
        self.authenticate(AuthKind::Register, username, password).await
    }

    /// Logout — best-effort server notification, then always clear the local session.
    ///
    /// The state change and the token removal happen together under the
    /// auth-state lock, so a login reply landing afterwards is discarded
    /// instead of re-storing its token.
    pub async fn logout(&self) {
        self.client.status(StatusLine::neutral("Logging out..."));

        let request = LogoutRequest {
            token: self.client.http.session().get_token(),
        };
        if let Err(e) = self
            .client
            .http
            .post::<serde_json::Value, _>(LOGOUT_PATH, &request)
            .await
        {
            tracing::debug!(error = %e, "logout notification failed, clearing session anyway");
        }

        {
            let mut state = self.client.auth_state.write().await;
            tracing::debug!(from = %*state, to = %AuthState::LoggedOut, "auth transition");
            *state = AuthState::LoggedOut;
            self.client.http.session().clear();
        }
        *self.client.profile.write().await = None;
        *self.client.inventory.write().await = None;
        self.client.renderer.logged_out();
        self.client.status(StatusLine::neutral("Logged out."));
    }

    pub async fn state(&self) -> AuthState {
        self.client.auth_state.read().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.client.auth_state.read().await.is_logged_in()
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn authenticate(
        &self,
        kind: AuthKind,
        username: &str,
        password: &str,
    ) -> Result<Profile, SdkError> {
        let credentials = match Credentials::new(username, password) {
            Ok(c) => c,
            Err(e) => {
                self.client.status(StatusLine::error(e.message()));
                return Err(e);
            }
        };

        if !self.transition(AuthState::Authenticating).await {
            let err = match self.state().await {
                AuthState::Authenticating => SdkError::Other("Login already in progress.".into()),
                _ => SdkError::Other("Already logged in.".into()),
            };
            self.client.status(StatusLine::error(err.message()));
            return Err(err);
        }

        self.client.status(StatusLine::neutral("Connecting..."));
        let resp = match self
            .client
            .http
            .post::<AuthResponse, _>(kind.path(), &credentials)
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                self.transition(AuthState::LoggedOut).await;
                self.client.status(StatusLine::error_or(&e, "Login failed."));
                return Err(e);
            }
        };

        let profile = resp.profile.unwrap_or_default();
        // A logout while the request was in flight wins: the reply's token is
        // dropped and nothing is rendered.
        let Some(state) = self
            .enter_logged_in(&profile, &credentials.username, resp.token.as_deref())
            .await
        else {
            return Err(SdkError::Other(LOGIN_CANCELLED.into()));
        };
        let name = state.username().unwrap_or_default();
        self.client
            .status(StatusLine::neutral(format!("Logged in as {}.", name)));
        Ok(profile)
    }

    /// `LoggedIn` with the server's username, or `fallback` when it sent none,
    /// storing `token` if one was issued.
    ///
    /// Returns `None` without side effects when the attempt is no longer
    /// current (the state left `Authenticating` meanwhile).
    async fn enter_logged_in(
        &self,
        profile: &Profile,
        fallback: &str,
        token: Option<&str>,
    ) -> Option<AuthState> {
        let username = if profile.username.is_empty() {
            fallback.to_string()
        } else {
            profile.username.clone()
        };
        let state = AuthState::LoggedIn { username };
        {
            // Held until the profile is shown: logout takes the same lock.
            let mut current = self.client.auth_state.write().await;
            if *current != AuthState::Authenticating {
                tracing::debug!(state = %*current, "login reply discarded");
                return None;
            }
            tracing::debug!(from = %*current, to = %state, "auth transition");
            *current = state.clone();
            if let Some(token) = token.filter(|t| !t.is_empty()) {
                self.client.http.session().set_token(token);
            }
            self.client.profile().show(profile).await;
        }
        Some(state)
    }

    async fn enter_logged_out(&self) {
        self.transition(AuthState::LoggedOut).await;
        self.client.renderer.logged_out();
    }

    /// Apply an allowed transition. Re-entering a settled state is a no-op;
    /// entering `Authenticating` twice is refused so only one attempt runs.
    async fn transition(&self, next: AuthState) -> bool {
        let mut state = self.client.auth_state.write().await;
        if *state == next && next != AuthState::Authenticating {
            return true;
        }
        if !state.can_transition_to(&next) {
            tracing::debug!(from = %*state, to = %next, "auth transition rejected");
            return false;
        }
        tracing::debug!(from = %*state, to = %next, "auth transition");
        *state = next;
        true
    }
}
