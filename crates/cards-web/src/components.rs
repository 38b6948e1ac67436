//! UI Components

use leptos::html;
use leptos::prelude::*;

use cards_core::{Feature, Plan, Route};

use crate::auth::{self, SignedIn, SignedOut};

/// Top app bar with auth-dependent actions
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="app-bar">
            <span class="title">"Flashcard SaaS"</span>
            <SignedOut>
                <a href=Route::SignIn.path()>"Log In"</a>
                <a href=Route::SignUp.path()>"Sign Up"</a>
            </SignedOut>
            <SignedIn>
                <UserButton />
            </SignedIn>
        </header>
    }
}

/// Mount point for the auth widget's user menu
#[component]
fn UserButton() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if let Some(el) = node.get() {
            auth::mount_user_button(&el);
        }
    });

    view! { <div class="user-button" node_ref=node></div> }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature">
            <h3>{feature.title}</h3>
            <p>{feature.body}</p>
        </div>
    }
}

/// Pricing card; `on_choose` is absent for plans without a checkout path
#[component]
pub fn PlanCard(
    plan: Plan,
    #[prop(optional, into)] on_choose: Option<Callback<()>>,
) -> impl IntoView {
    let pricing = plan.pricing();

    view! {
        <div class="plan">
            <h3>{pricing.name}</h3>
            <h4>{pricing.price_label()}</h4>
            <p>{pricing.description}</p>
            <button
                class="btn"
                on:click=move |_| {
                    if let Some(cb) = on_choose {
                        cb.run(());
                    }
                }
            >
                {plan.call_to_action()}
            </button>
        </div>
    }
}
