//! Wire types for the login/register endpoint.
//!
//! DESIGN
//! ======
//! The endpoint takes a single JSON body for both actions and answers with
//! either `{token, user_id}` on success or `{message}` on failure. Ids may be
//! emitted as JSON integers by the backend, so they are normalized to strings
//! on the way in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Why a login or register attempt failed.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A success status arrived with a body that is not a usable session.
    #[error("invalid response from auth server: {0}")]
    MalformedResponse(String),

    /// The session could not be written to durable storage.
    #[error("could not save session: {0}")]
    Storage(String),

    /// Another login/register call on the same store has not finished.
    #[error("another sign-in request is already in progress")]
    Busy,
}

// =============================================================================
// REQUEST
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    /// Message used when a failed response carries no `message` of its own.
    pub fn generic_failure(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

/// JSON body posted to the auth endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthRequest {
    pub action: AuthAction,
    pub email: String,
    pub password: String,
}

impl AuthRequest {
    pub fn new(action: AuthAction, email: &str, password: &str) -> Self {
        Self { action, email: email.to_owned(), password: password.to_owned() }
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("action", &self.action)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Status and body exactly as received, before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Success body. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthSuccess {
    pub token: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
}

/// Failure body. `message` is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthFailureBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}
