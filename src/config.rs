//! Client configuration.
//!
//! The auth endpoint is resolved from the runtime environment on native
//! targets, from the build environment for the browser bundle, and otherwise
//! falls back to the local development server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const ENDPOINT_ENV_VAR: &str = "PROFILECARD_AUTH_ENDPOINT";
pub const DEFAULT_AUTH_ENDPOINT: &str = "http://localhost:8000/backend/api/auth.php";

/// Errors produced while resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The endpoint is not an absolute `http(s)` URL.
    #[error("invalid PROFILECARD_AUTH_ENDPOINT: {0:?} (expected an http:// or https:// URL)")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Full URL of the login/register endpoint.
    pub endpoint: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_AUTH_ENDPOINT.to_owned() }
    }
}

impl AuthConfig {
    /// Build config from the environment.
    ///
    /// Optional:
    /// - `PROFILECARD_AUTH_ENDPOINT`: read at runtime first, then at compile
    ///   time (the only source available inside the browser)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] when the variable is set to
    /// something other than an `http(s)` URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let runtime = std::env::var(ENDPOINT_ENV_VAR).ok();
        let raw = runtime.as_deref().or(option_env!("PROFILECARD_AUTH_ENDPOINT"));
        Ok(Self { endpoint: parse_endpoint(raw)? })
    }
}

fn parse_endpoint(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_AUTH_ENDPOINT.to_owned());
    };
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(raw.to_owned())
    } else {
        Err(ConfigError::InvalidEndpoint(raw.to_owned()))
    }
}
