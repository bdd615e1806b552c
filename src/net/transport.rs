//! HTTP transport for the auth endpoint.
//!
//! Browser (`csr`): requests go through `gloo-net`.
//! Native: requests go through `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! Transports only report whether a response arrived. Turning status + body
//! into a session or a user-facing message happens in
//! [`interpret_response`], which is shared by every transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::types::{AuthAction, AuthError, AuthFailureBody, AuthRequest, AuthSuccess, RawResponse};
use crate::config::AuthConfig;

/// Posts auth requests to the remote endpoint.
///
/// Single attempt: no retry, no timeout.
#[cfg_attr(feature = "csr", async_trait::async_trait(?Send))]
#[cfg_attr(not(feature = "csr"), async_trait::async_trait)]
pub trait AuthTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AuthError::Network`] when no response was received.
    async fn submit(&self, request: &AuthRequest) -> Result<RawResponse, AuthError>;
}

/// JSON-over-HTTP transport targeting [`AuthConfig::endpoint`].
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
    #[cfg(not(feature = "csr"))]
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            #[cfg(not(feature = "csr"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl AuthTransport for HttpTransport {
    async fn submit(&self, request: &AuthRequest) -> Result<RawResponse, AuthError> {
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(not(feature = "csr"))]
#[async_trait::async_trait]
impl AuthTransport for HttpTransport {
    async fn submit(&self, request: &AuthRequest) -> Result<RawResponse, AuthError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

/// Turn a raw endpoint response into session data or a failure message.
///
/// # Errors
///
/// - [`AuthError::Rejected`] for non-success statuses, carrying the body's
///   `message` or the action's generic failure text.
/// - [`AuthError::MalformedResponse`] for a success status whose body lacks a
///   usable `token`/`user_id`.
pub fn interpret_response(action: AuthAction, raw: &RawResponse) -> Result<AuthSuccess, AuthError> {
    if !raw.is_success() {
        let message = serde_json::from_str::<AuthFailureBody>(&raw.body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| action.generic_failure().to_owned());
        return Err(AuthError::Rejected { status: raw.status, message });
    }

    let success: AuthSuccess =
        serde_json::from_str(&raw.body).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
    if success.token.is_empty() {
        return Err(AuthError::MalformedResponse("empty token".to_owned()));
    }
    Ok(success)
}
