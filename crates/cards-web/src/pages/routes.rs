//! Pages owned by other parts of the product.
//!
//! The landing page links here; the real screens live elsewhere.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use cards_core::Route;

use crate::components::NavBar;

#[component]
fn Stub(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <NavBar />
        <div class="container section">
            <h2>{title}</h2>
            {children()}
            <p><a href=Route::Home.path()>"Back to home"</a></p>
        </div>
    }
}

#[component]
pub fn GeneratePage() -> impl IntoView {
    view! {
        <Stub title="Generate Flashcards">
            <p>"Paste your text to turn it into flashcards."</p>
        </Stub>
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <Stub title="Log In">
            <div id="sign-in"></div>
        </Stub>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <Stub title="Sign Up">
            <div id="sign-up"></div>
        </Stub>
    }
}

/// Hosted checkout returns here with `?session_id=...`
#[component]
pub fn ResultPage() -> impl IntoView {
    let query = use_query_map();
    let session_id = move || query.with(|q| q.get("session_id")).unwrap_or_default();

    view! {
        <Stub title="Checkout">
            <p>"Thanks for subscribing. Your session: " {session_id}</p>
        </Stub>
    }
}
