//! Auth Display State
//!
//! Sign-in itself belongs to the hosted auth widget (Clerk). The page only
//! needs to know which app bar variant to show, and where to mount the
//! widget's user button. The widget is constructed once at startup and its
//! session listener keeps the status signal current.

use std::cell::OnceCell;

use js_sys::{Array, Function, Promise, Reflect};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Publishable key baked in at build time
pub const CLERK_PUBLISHABLE_KEY: Option<&str> = option_env!("CLERK_PUBLISHABLE_KEY");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    SignedIn,
    #[default]
    SignedOut,
}

impl AuthStatus {
    /// Status implied by a Clerk `user` value
    fn from_user(user: &JsValue) -> Self {
        if user.is_truthy() { Self::SignedIn } else { Self::SignedOut }
    }
}

thread_local! {
    static CLERK: OnceCell<JsValue> = const { OnceCell::new() };
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(target, &JsValue::from_str(name))?.dyn_into()
}

/// Construct and load the widget, then follow its session changes
async fn connect(status: RwSignal<AuthStatus>) -> Result<(), JsValue> {
    let Some(key) = CLERK_PUBLISHABLE_KEY.filter(|k| !k.is_empty()) else {
        tracing::debug!("CLERK_PUBLISHABLE_KEY not set, staying signed out");
        return Ok(());
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let constructor = method(&window, "Clerk")?;
    let clerk = Reflect::construct(&constructor, &Array::of1(&JsValue::from_str(key)))?;

    let loaded: Promise = method(&clerk, "load")?.call0(&clerk)?.dyn_into()?;
    JsFuture::from(loaded).await?;

    CLERK.with(|cell| {
        let _ = cell.set(clerk.clone());
    });
    status.set(AuthStatus::from_user(
        &Reflect::get(&clerk, &"user".into()).unwrap_or(JsValue::UNDEFINED),
    ));

    // Fires on every sign-in, sign-out and session refresh
    let listener = Closure::<dyn Fn(JsValue)>::new(move |resources: JsValue| {
        let user = Reflect::get(&resources, &"user".into()).unwrap_or(JsValue::UNDEFINED);
        status.set(AuthStatus::from_user(&user));
    });
    method(&clerk, "addListener")?.call1(&clerk, listener.as_ref())?;
    listener.forget();

    Ok(())
}

/// Provide the status signal and start the widget in the background
pub fn provide_auth_status() {
    let status = RwSignal::new(AuthStatus::SignedOut);
    provide_context(status);

    leptos::task::spawn_local(async move {
        if let Err(e) = connect(status).await {
            tracing::warn!("Auth widget unavailable: {:?}", e);
        }
    });
}

pub fn use_auth_status() -> RwSignal<AuthStatus> {
    use_context::<RwSignal<AuthStatus>>().unwrap_or_else(|| RwSignal::new(AuthStatus::SignedOut))
}

/// Hand an element to `Clerk.mountUserButton`
pub fn mount_user_button(element: &web_sys::Element) {
    let Some(clerk) = CLERK.with(|cell| cell.get().cloned()) else {
        tracing::debug!("Auth widget not loaded, user button not mounted");
        return;
    };

    let mounted = method(&clerk, "mountUserButton").and_then(|mount| mount.call1(&clerk, element));
    if let Err(e) = mounted {
        tracing::warn!("Mounting user button failed: {:?}", e);
    }
}

/// Children shown only while signed in
#[component]
pub fn SignedIn(children: ChildrenFn) -> impl IntoView {
    let status = use_auth_status();
    view! {
        <Show when=move || status.get() == AuthStatus::SignedIn>
            {children()}
        </Show>
    }
}

/// Children shown only while signed out
#[component]
pub fn SignedOut(children: ChildrenFn) -> impl IntoView {
    let status = use_auth_status();
    view! {
        <Show when=move || status.get() == AuthStatus::SignedOut>
            {children()}
        </Show>
    }
}
