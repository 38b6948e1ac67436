//! Error Types

use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Failures while obtaining a checkout session
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Endpoint answered with a 5xx status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Body was not JSON or carried no usable session id
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure reported by the payment SDK's redirect call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RedirectError(pub String);

impl From<reqwest::Error> for CheckoutError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = CheckoutError::Server {
            status: 500,
            message: "No such price".into(),
        };
        assert_eq!(err.to_string(), "Server error (500): No such price");
    }

    #[test]
    fn test_redirect_error_display() {
        assert_eq!(RedirectError("network error".into()).to_string(), "network error");
    }
}
