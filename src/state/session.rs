//! Session store: the single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard and every page read authentication status from here.
//! Only `login`, `register` and `logout` change it, and every change is
//! written through to durable storage before the in-memory value moves.
//!
//! CONCURRENCY
//! ===========
//! One login/register request may be in flight per store. A second call made
//! while the first is pending fails with [`AuthError::Busy`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::transport::{AuthTransport, interpret_response};
use crate::net::types::{AuthAction, AuthError, AuthRequest};
use crate::routes::LOGIN_PATH;
use crate::util::navigation::Navigator;
use crate::util::storage::{KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_ID_KEY: &str = "user_id";

const CONTENT_TYPE_JSON: &str = "application/json";

// =============================================================================
// SESSION VALUE
// =============================================================================

/// Token and user id of an authenticated user. Always present together.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    user_id: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self { token: token.into(), user_id: user_id.into() }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Headers for authenticated API calls.
    pub fn auth_headers(&self) -> AuthHeaders {
        AuthHeaders { authorization: format!("Bearer {}", self.token) }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// `Authorization` + `Content-Type` header pair for API requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthHeaders {
    authorization: String,
}

impl AuthHeaders {
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE_JSON
    }

    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [("Authorization", &self.authorization), ("Content-Type", CONTENT_TYPE_JSON)]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Credentials),
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::LoggedIn(credentials) => Some(credentials),
            Self::LoggedOut => None,
        }
    }

    /// Restore the session persisted in `storage`.
    ///
    /// A missing or empty token means logged out. A token without a user id
    /// (or the reverse) is a half-written pair: both keys are dropped.
    pub fn load(storage: &dyn KeyValueStore) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|token| !token.is_empty());
        let user_id = storage.get(USER_ID_KEY);
        match (token, user_id) {
            (Some(token), Some(user_id)) => Self::LoggedIn(Credentials { token, user_id }),
            (None, None) => Self::LoggedOut,
            _ => {
                log::warn!("discarding partially persisted session");
                clear_persisted(storage);
                Self::LoggedOut
            }
        }
    }

    fn persist(&self, storage: &dyn KeyValueStore) -> Result<(), StorageError> {
        match self {
            Self::LoggedIn(credentials) => {
                storage.set(TOKEN_KEY, &credentials.token)?;
                storage.set(USER_ID_KEY, &credentials.user_id)
            }
            Self::LoggedOut => {
                clear_persisted(storage);
                Ok(())
            }
        }
    }
}

fn clear_persisted(storage: &dyn KeyValueStore) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_ID_KEY);
}

// =============================================================================
// STORE
// =============================================================================

/// Owns the current [`Session`] and the collaborators that change it.
///
/// Cloning is cheap; clones share the same session.
#[derive(Clone)]
pub struct SessionStore {
    session: ArcRwSignal<Session>,
    storage: Arc<dyn KeyValueStore>,
    transport: Arc<dyn AuthTransport>,
    navigator: Arc<dyn Navigator>,
    in_flight: Arc<AtomicBool>,
}

impl SessionStore {
    /// Build a store, restoring any session already in `storage`.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        transport: Arc<dyn AuthTransport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let session = Session::load(storage.as_ref());
        Self {
            session: ArcRwSignal::new(session),
            storage,
            transport,
            navigator,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current session (tracked).
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Current session without subscribing the caller.
    pub fn session_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    /// True iff a token is present (tracked).
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_logged_in)
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.session.with(|session| session.credentials().cloned())
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.with(|session| session.credentials().map(|c| c.user_id.clone()))
    }

    /// Auth headers for the current user, or `None` when logged out.
    pub fn auth_headers(&self) -> Option<AuthHeaders> {
        self.session.with(|session| session.credentials().map(Credentials::auth_headers))
    }

    /// # Errors
    ///
    /// See [`SessionStore::authenticate`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Credentials, AuthError> {
        self.authenticate(AuthAction::Login, email, password).await
    }

    /// # Errors
    ///
    /// See [`SessionStore::authenticate`].
    pub async fn register(&self, email: &str, password: &str) -> Result<Credentials, AuthError> {
        self.authenticate(AuthAction::Register, email, password).await
    }

    /// Exchange email + password for a session via `action`.
    ///
    /// On success the new credentials are persisted and become the current
    /// session. On any failure the session is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] whose `Display` is suitable for the user.
    pub async fn authenticate(&self, action: AuthAction, email: &str, password: &str) -> Result<Credentials, AuthError> {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            log::warn!("{} rejected: request already in flight", action.as_str());
            return Err(AuthError::Busy);
        };

        let result = self.exchange(action, email, password).await;
        match &result {
            Ok(credentials) => log::info!("{} succeeded for user {}", action.as_str(), credentials.user_id),
            Err(e) => log::warn!("{} failed: {e}", action.as_str()),
        }
        result
    }

    async fn exchange(&self, action: AuthAction, email: &str, password: &str) -> Result<Credentials, AuthError> {
        let request = AuthRequest::new(action, email, password);
        let raw = self.transport.submit(&request).await?;
        let success = interpret_response(action, &raw)?;
        let credentials = Credentials { token: success.token, user_id: success.user_id };
        self.replace(Session::LoggedIn(credentials.clone()))
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        Ok(credentials)
    }

    /// Clear the session and send the browser to `/login`.
    pub fn logout(&self) {
        clear_persisted(self.storage.as_ref());
        self.session.set(Session::LoggedOut);
        log::info!("logged out");
        self.navigator.navigate(LOGIN_PATH);
    }

    fn replace(&self, next: Session) -> Result<(), StorageError> {
        if let Err(e) = next.persist(self.storage.as_ref()) {
            let previous = self.session.get_untracked();
            if let Err(restore) = previous.persist(self.storage.as_ref()) {
                log::warn!("restoring previous session after failed write: {restore}");
            }
            return Err(e);
        }
        self.session.set(next);
        Ok(())
    }
}

/// Holds the store's in-flight flag until dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
