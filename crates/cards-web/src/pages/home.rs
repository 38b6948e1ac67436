//! Landing Page

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_navigate;

use cards_core::{CheckoutInitiator, FEATURES, Plan, route};

use crate::api::{self, RouterNavigator, StripeJsRedirect};
use crate::components::{FeatureCard, NavBar, PlanCard};

#[component]
pub fn HomePage() -> impl IntoView {
    let navigator = RouterNavigator::new(use_navigate());

    let get_started = move |_| route::get_started(&navigator);

    // Each click is an independent attempt; overlapping clicks are not guarded.
    let choose_pro = move || {
        leptos::task::spawn_local(async move {
            let initiator = CheckoutInitiator::new(
                api::session_api(),
                StripeJsRedirect::from_build_env(),
            );
            let outcome = initiator.initiate().await;
            tracing::debug!("Checkout finished: {:?}", outcome);
        });
    };

    view! {
        <Title text="Flashcard SaaS" />
        <Meta name="description" content="Create flashcards from your text" />

        <NavBar />

        <div class="container">
            <section class="hero">
                <h1>"CleverCards AI"</h1>
                <p>"Smart Flashcards for Smart Learning"</p>
                <button class="btn" on:click=get_started>"Get started"</button>
            </section>

            <section class="section">
                <h2>"Features"</h2>
                <div class="grid thirds">
                    {FEATURES
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2>"Pricing"</h2>
                <div class="grid halves">
                    {Plan::ALL
                        .into_iter()
                        .map(|plan| match plan {
                            Plan::Pro => view! { <PlanCard plan=plan on_choose=choose_pro /> }.into_any(),
                            Plan::Basic => view! { <PlanCard plan=plan /> }.into_any(),
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
