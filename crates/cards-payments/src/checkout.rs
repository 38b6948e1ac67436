//! Stripe Checkout Integration
//!
//! Creates hosted Checkout sessions for plan subscriptions. The browser
//! only needs the session id; Stripe.js turns it into the redirect.

use serde::{Deserialize, Serialize};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData,
    CreateCheckoutSessionLineItemsPriceDataRecurring,
    CreateCheckoutSessionLineItemsPriceDataRecurringInterval,
    CreateCheckoutSessionPaymentMethodTypes, Currency,
};

use cards_core::{BillingInterval, Plan, Route};

use crate::error::{PaymentError, Result};

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key))
    }

    /// Create a subscription Checkout session for `request.plan`.
    ///
    /// Success and cancel both land on the result page, which reads the
    /// session id back from the query string.
    pub async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        let return_url = return_url(&request.origin)?;
        let pricing = request.plan.pricing();

        let mut params = CreateCheckoutSession::new();
        params.success_url = Some(&return_url);
        params.cancel_url = Some(&return_url);
        params.mode = Some(CheckoutSessionMode::Subscription);
        params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);

        let mut metadata = std::collections::HashMap::new();
        metadata.insert("plan".to_string(), request.plan.as_str().to_string());
        params.metadata = Some(metadata);

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::USD,
                unit_amount: Some(pricing.cents),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: product_name(request.plan),
                    ..Default::default()
                }),
                recurring: Some(CreateCheckoutSessionLineItemsPriceDataRecurring {
                    interval: match pricing.interval {
                        BillingInterval::Monthly => CreateCheckoutSessionLineItemsPriceDataRecurringInterval::Month,
                        BillingInterval::Yearly => CreateCheckoutSessionLineItemsPriceDataRecurringInterval::Year,
                    },
                    interval_count: Some(1),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        tracing::info!("Created checkout session {} for plan {}", session.id, request.plan.as_str());

        Ok(CheckoutSession {
            id: session.id.to_string(),
            checkout_url: session.url,
            plan: request.plan,
        })
    }
}

/// Request to create a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Plan to purchase
    pub plan: Plan,

    /// Site origin the hosted page returns to
    pub origin: String,
}

/// Result of creating a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Stripe session ID
    pub id: String,

    /// Hosted page URL, when Stripe returns one
    pub checkout_url: Option<String>,

    /// Plan being purchased
    pub plan: Plan,
}

/// Line item name for a plan
pub fn product_name(plan: Plan) -> String {
    format!("{} subscription", plan.pricing().name)
}

/// `{origin}/result?session_id={CHECKOUT_SESSION_ID}`; Stripe fills the placeholder.
pub fn return_url(origin: &str) -> Result<String> {
    let origin = origin.trim_end_matches('/');
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(PaymentError::InvalidOrigin(origin.to_string()));
    }
    Ok(format!(
        "{}{}?session_id={{CHECKOUT_SESSION_ID}}",
        origin,
        Route::Result.path()
    ))
}
