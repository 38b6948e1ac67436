//! # cards-payments
//!
//! Stripe Checkout (hosted) for CleverCards subscriptions.
//!
//! ```text
//! ┌─────────────┐  session id  ┌─────────────────┐     ┌─────────────┐
//! │  Landing    │─────────────▶│  Stripe Hosted  │────▶│  /result    │
//! │  (pricing)  │  Stripe.js   │  Checkout Page  │     │             │
//! └─────────────┘              └─────────────────┘     └─────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cards_payments::{CheckoutRequest, StripeClient};
//! use cards_core::Plan;
//!
//! let client = StripeClient::new("sk_test_xxx");
//! let session = client.create_checkout_session(CheckoutRequest {
//!     plan: Plan::Pro,
//!     origin: "https://localhost:3000".into(),
//! }).await?;
//!
//! // Return session.id to the browser
//! ```

mod checkout;
mod error;

pub use checkout::{CheckoutRequest, CheckoutSession, StripeClient, product_name, return_url};
pub use error::{PaymentError, Result};
