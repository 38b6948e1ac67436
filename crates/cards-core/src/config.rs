//! Client Configuration

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// Path of the session-creation endpoint
pub const DEFAULT_ENDPOINT: &str = "/api/checkout_session";

/// Value sent in the `origin` header
pub const DEFAULT_ORIGIN: &str = "https://localhost:3000";

/// Where the checkout session request goes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and authority the endpoint is resolved against
    pub base_url: String,

    /// Endpoint path
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// `origin` header value
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.into()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            endpoint: default_endpoint(),
            origin: default_origin(),
        }
    }
}

impl ClientConfig {
    /// Config rooted at the given base URL, other fields defaulted
    pub fn for_base(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Absolute URL of the session endpoint
    pub fn endpoint_url(&self) -> Result<String> {
        let base = self.base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CheckoutError::Config(format!(
                "base URL must be absolute http(s), got {:?}",
                self.base_url
            )));
        }
        if !self.endpoint.starts_with('/') {
            return Err(CheckoutError::Config(format!(
                "endpoint must start with '/', got {:?}",
                self.endpoint
            )));
        }
        Ok(format!("{}{}", base, self.endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "/api/checkout_session");
        assert_eq!(config.origin, "https://localhost:3000");
    }

    #[test]
    fn test_endpoint_url_joins_base() {
        let config = ClientConfig::for_base("http://127.0.0.1:8080/");
        assert_eq!(
            config.endpoint_url().unwrap(),
            "http://127.0.0.1:8080/api/checkout_session"
        );
    }

    #[test]
    fn test_endpoint_url_rejects_relative_base() {
        let config = ClientConfig::for_base("/relative");
        assert!(matches!(config.endpoint_url(), Err(CheckoutError::Config(_))));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"https://cards.example"}"#).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.origin, DEFAULT_ORIGIN);
    }
}
