//! Application State

use std::path::PathBuf;
use std::sync::Arc;

use cards_payments::StripeClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Stripe client (optional - None if not configured)
    pub stripe: Option<Arc<StripeClient>>,

    /// Built frontend (`trunk build` output)
    pub static_dir: PathBuf,
}
