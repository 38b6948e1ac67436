//! # cards-core
//!
//! Platform-neutral logic behind the CleverCards landing page.
//!
//! The page has two control paths, each a thin sequence over a collaborator
//! trait so it runs the same in the browser and under `cargo test`:
//!
//! ```text
//! "Get started" ──▶ Navigator::navigate(Route::Generate)
//!
//! "Choose Pro"  ──▶ CheckoutInitiator
//!                     ├─▶ SessionApi        (POST /api/checkout_session)
//!                     └─▶ CheckoutRedirect  (payment SDK, hosted checkout)
//! ```

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod route;
pub mod session;

pub use catalog::{BillingInterval, FEATURES, Feature, Plan, PlanPricing};
pub use checkout::{CheckoutInitiator, CheckoutOutcome, CheckoutRedirect};
pub use config::ClientConfig;
pub use error::{CheckoutError, RedirectError, Result};
pub use route::{Navigator, Route};
pub use session::{CheckoutSessionId, HttpSessionApi, SessionApi};
