//! # Session State
//!
//! The in-memory view of who is signed in, mirrored to storage under the
//! `token` and `user` keys.
//!
//! ## State Machine
//!
//! ```text
//! Uninitialized ──initialize()──► Loading ──┬──► Authenticated(user)
//!                                           └──► Anonymous
//!
//! Authenticated ──logout() / 401──► Anonymous
//! any ──login()/register() success──► Authenticated(user)
//! ```
//!
//! A stored token without a stored user is never trusted: `initialize()`
//! discards it and starts anonymous, forcing a fresh login.
//!
//! ## Sharing
//!
//! One `Session` is created per client and shared through `Arc` with the
//! HTTP pipeline (which reads the token and clears the session on 401) and
//! with UI glue (which calls `login`/`logout` and watches [`Session::subscribe`]).

use std::future::Future;

use shared::{token_preview, AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use tokio::sync::watch;

use crate::core::error::ApiError;
use crate::core::service::AuthService;
use crate::storage::SafeStorage;

/// Storage key of the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON user profile.
pub const USER_KEY: &str = "user";

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Authenticated(UserProfile),
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Result of [`Session::login`] and [`Session::register`].
///
/// These operations never return `Err`: every failure is folded into
/// `Failure` with a message fit for display.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Success { user: Option<UserProfile> },
    Failure { error: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthOutcome::Failure { error } => Some(error),
            AuthOutcome::Success { .. } => None,
        }
    }
}

/// Session state holder.
pub struct Session {
    storage: SafeStorage,
    state: watch::Sender<SessionState>,
}

impl Session {
    /// Create an uninitialized session over `storage`. Call
    /// [`Session::initialize`] before relying on [`Session::state`].
    pub fn new(storage: SafeStorage) -> Self {
        let (state, _) = watch::channel(SessionState::Uninitialized);
        Self { storage, state }
    }

    /// Restore the session from storage.
    pub fn initialize(&self) -> SessionState {
        self.set_state(SessionState::Loading);

        let stored_user = self.storage.get_json::<UserProfile>(USER_KEY);
        let raw_token = self.token();

        tracing::debug!(
            has_user = stored_user.is_some(),
            token = %preview_or_none(raw_token.as_deref()),
            "Restoring session"
        );

        let next = match (raw_token, stored_user) {
            (Some(_), Some(user)) => SessionState::Authenticated(user),
            (Some(_), None) => {
                tracing::warn!("Found a token without a stored user, clearing it");
                self.storage.remove(TOKEN_KEY);
                SessionState::Anonymous
            }
            // An empty token never authenticates a request
            (None, _) => SessionState::Anonymous,
        };

        self.set_state(next.clone());
        next
    }

    #[tracing::instrument(skip(self, api, password))]
    pub async fn login(&self, api: &dyn AuthService, email: &str, password: &str) -> AuthOutcome {
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.authenticate(api.login(credentials), LOGIN_FAILED).await
    }

    #[tracing::instrument(skip_all, fields(email = %user_data.email))]
    pub async fn register(&self, api: &dyn AuthService, user_data: RegisterRequest) -> AuthOutcome {
        self.authenticate(api.register(user_data), REGISTRATION_FAILED)
            .await
    }

    /// Forget the signed-in user. Safe to call when already anonymous.
    pub fn logout(&self) {
        tracing::debug!("Clearing stored auth");
        self.clear();
    }

    /// Clear the session after the server rejected our credentials (401).
    pub fn invalidate(&self) {
        tracing::warn!("Session rejected by server, clearing stored auth");
        self.clear();
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// True until [`Session::initialize`] has finished.
    pub fn is_loading(&self) -> bool {
        matches!(
            *self.state.borrow(),
            SessionState::Uninitialized | SessionState::Loading
        )
    }

    /// Current bearer token, read through storage.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get_string(TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Receive every state change, e.g. to re-render.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn storage(&self) -> &SafeStorage {
        &self.storage
    }

    async fn authenticate<F>(&self, call: F, fallback: &str) -> AuthOutcome
    where
        F: Future<Output = Result<AuthResponse, ApiError>>,
    {
        match call.await {
            Ok(AuthResponse { token, user }) => {
                if let Some(user) = &user {
                    self.storage.set_json(USER_KEY, user);
                }
                if let Some(token) = token.as_deref().filter(|t| !t.is_empty()) {
                    self.storage.set_string(TOKEN_KEY, token);
                }

                tracing::info!(
                    has_token = token.is_some(),
                    has_user = user.is_some(),
                    token = %preview_or_none(token.as_deref()),
                    "Authenticated"
                );

                self.set_state(match &user {
                    Some(user) => SessionState::Authenticated(user.clone()),
                    None => SessionState::Anonymous,
                });
                AuthOutcome::Success { user }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Authentication failed");
                AuthOutcome::Failure {
                    error: failure_message(&e, fallback),
                }
            }
        }
    }

    fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.set_state(SessionState::Anonymous);
    }

    fn set_state(&self, next: SessionState) {
        self.state.send_replace(next);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

fn preview_or_none(token: Option<&str>) -> String {
    token.map(token_preview).unwrap_or_else(|| "none".to_string())
}

/// Server message first, then the error's own text, then `fallback`.
fn failure_message(err: &ApiError, fallback: &str) -> String {
    if let Some(message) = err.server_message().filter(|m| !m.trim().is_empty()) {
        return message.to_string();
    }
    let own = err.to_string();
    if own.trim().is_empty() {
        fallback.to_string()
    } else {
        own
    }
}
