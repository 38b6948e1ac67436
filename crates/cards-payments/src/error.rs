//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Origin header missing or not an absolute URL
    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Get user-friendly message
    pub const fn user_message(&self) -> &str {
        match self {
            Self::Stripe(_) => "Payment processing failed. Please try again.",
            Self::InvalidOrigin(_) => "Request origin is not allowed.",
            Self::Config(_) => "Service configuration error.",
        }
    }
}
