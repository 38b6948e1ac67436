//! Checkout Session Client
//!
//! Asks the backend for a new payment checkout session. The backend is
//! opaque here: it answers `POST /api/checkout_session` with `{"id": "..."}`
//! or a 5xx status and an error message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{CheckoutError, Result};

/// Opaque checkout session identifier issued by the backend.
///
/// Not `Clone`: handing it to the redirect consumes it, so a session is
/// used at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckoutSessionId(String);

impl CheckoutSessionId {
    /// Wrap a non-empty identifier
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() { None } else { Some(Self(id)) }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CheckoutSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Success body of the session endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
}

/// Creates checkout sessions
#[async_trait(?Send)]
pub trait SessionApi {
    /// Issue one session-creation request. Never retried.
    async fn create_session(&self) -> Result<CheckoutSessionId>;
}

/// `SessionApi` over HTTP
#[derive(Clone, Debug)]
pub struct HttpSessionApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpSessionApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl SessionApi for HttpSessionApi {
    async fn create_session(&self) -> Result<CheckoutSessionId> {
        let url = self.config.endpoint_url()?;

        let response = self
            .client
            .post(&url)
            .header("origin", self.config.origin.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_server_error() {
            return Err(CheckoutError::Server {
                status: status.as_u16(),
                message: error_message(&body).unwrap_or_else(|| status.to_string()),
            });
        }

        parse_session(&body).map_err(|e| {
            if status.is_success() {
                e
            } else {
                CheckoutError::InvalidResponse(format!("{status}: {e}"))
            }
        })
    }
}

/// Extract the session id from a success body
pub fn parse_session(body: &str) -> Result<CheckoutSessionId> {
    let parsed: SessionResponse = serde_json::from_str(body)
        .map_err(|e| CheckoutError::InvalidResponse(e.to_string()))?;

    CheckoutSessionId::new(parsed.id)
        .ok_or_else(|| CheckoutError::InvalidResponse("empty session id".into()))
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"error": {"message": ..}}`, `{"message": ..}` and `{"error": ..}`.
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    value["error"]["message"]
        .as_str()
        .or_else(|| value["message"].as_str())
        .or_else(|| value["error"].as_str())
        .map(str::to_string)
}
