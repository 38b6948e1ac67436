//! Browser Collaborators
//!
//! Implementations of the `cards-core` traits backed by the page: the
//! Leptos router, `fetch` through reqwest, and Stripe.js.

use std::cell::OnceCell;

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use leptos_router::NavigateOptions;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use cards_core::{
    CheckoutRedirect, CheckoutSessionId, ClientConfig, HttpSessionApi, Navigator, RedirectError,
    Route,
};

/// Publishable key baked in at build time
pub const STRIPE_PUBLISHABLE_KEY: Option<&str> = option_env!("STRIPE_PUBLISHABLE_KEY");

/// `Navigator` over a Leptos `use_navigate` handle
#[derive(Clone)]
pub struct RouterNavigator<F>(F);

impl<F: Fn(&str, NavigateOptions)> RouterNavigator<F> {
    pub const fn new(navigate: F) -> Self {
        Self(navigate)
    }
}

impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn navigate(&self, route: Route) {
        (self.0)(route.path(), NavigateOptions::default());
    }
}

/// Session client pointed at the page's own origin
pub fn session_api() -> HttpSessionApi {
    let base = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    HttpSessionApi::new(ClientConfig::for_base(base))
}

thread_local! {
    static STRIPE: OnceCell<JsValue> = const { OnceCell::new() };
}

/// Stripe.js `redirectToCheckout`
pub struct StripeJsRedirect {
    publishable_key: String,
}

impl StripeJsRedirect {
    pub fn new(publishable_key: impl Into<String>) -> Self {
        Self {
            publishable_key: publishable_key.into(),
        }
    }

    /// Use the key from `STRIPE_PUBLISHABLE_KEY` at build time
    pub fn from_build_env() -> Self {
        Self::new(STRIPE_PUBLISHABLE_KEY.unwrap_or_default())
    }

    /// `Stripe(key)`, created once per page load
    fn instance(&self) -> Result<JsValue, RedirectError> {
        if let Some(stripe) = STRIPE.with(|cell| cell.get().cloned()) {
            return Ok(stripe);
        }

        if self.publishable_key.is_empty() {
            return Err(RedirectError("STRIPE_PUBLISHABLE_KEY was not set at build time".into()));
        }

        let window = web_sys::window().ok_or_else(|| RedirectError("no window".into()))?;
        let constructor: Function = Reflect::get(&window, &"Stripe".into())
            .ok()
            .and_then(|v| v.dyn_into().ok())
            .ok_or_else(|| RedirectError("Stripe.js is not loaded".into()))?;

        let stripe = constructor
            .call1(&JsValue::NULL, &self.publishable_key.as_str().into())
            .map_err(|e| RedirectError(js_message(&e)))?;

        STRIPE.with(|cell| {
            let _ = cell.set(stripe.clone());
        });
        Ok(stripe)
    }
}

#[async_trait(?Send)]
impl CheckoutRedirect for StripeJsRedirect {
    async fn redirect_to_checkout(&self, session: CheckoutSessionId) -> Result<(), RedirectError> {
        let stripe = self.instance()?;

        let redirect: Function = Reflect::get(&stripe, &"redirectToCheckout".into())
            .ok()
            .and_then(|v| v.dyn_into().ok())
            .ok_or_else(|| RedirectError("redirectToCheckout unavailable".into()))?;

        let options = Object::new();
        Reflect::set(&options, &"sessionId".into(), &session.into_inner().into())
            .map_err(|e| RedirectError(js_message(&e)))?;

        let promise: Promise = redirect
            .call1(&stripe, &options)
            .and_then(|v| v.dyn_into::<Promise>())
            .map_err(|e| RedirectError(js_message(&e)))?;

        let result = JsFuture::from(promise)
            .await
            .map_err(|e| RedirectError(js_message(&e)))?;

        // Resolves with `{ error }` only when the redirect did not happen
        let error = Reflect::get(&result, &"error".into()).unwrap_or(JsValue::UNDEFINED);
        if error.is_undefined() || error.is_null() {
            Ok(())
        } else {
            Err(RedirectError(js_message(&error)))
        }
    }
}

/// Best-effort text of a JS error value
fn js_message(value: &JsValue) -> String {
    Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
