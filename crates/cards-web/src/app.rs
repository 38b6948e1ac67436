//! Main App Component

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{components::*, path};

use crate::auth;
use crate::pages::{GeneratePage, HomePage, ResultPage, SignInPage, SignUpPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    auth::provide_auth_status();

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/generate") view=GeneratePage />
                    <Route path=path!("/sign-in") view=SignInPage />
                    <Route path=path!("/sign-up") view=SignUpPage />
                    <Route path=path!("/result") view=ResultPage />
                </Routes>
            </main>
        </Router>
    }
}
