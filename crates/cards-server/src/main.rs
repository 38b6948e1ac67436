//! CleverCards HTTP Server
//!
//! Axum server for the landing page: serves the built WASM frontend and
//! the checkout session endpoint the "Choose Pro" button calls.

mod handlers;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cards_core::Plan;
use cards_core::config::DEFAULT_ENDPOINT;
use cards_payments::StripeClient;

use crate::handlers::{create_checkout_session, health_check};
use crate::state::AppState;

/// Build the application router
fn router(state: AppState) -> Router {
    // Client-side routes (/generate, /sign-in, ...) fall through to index.html
    let frontend = ServeDir::new(&state.static_dir)
        .fallback(ServeFile::new(state.static_dir.join("index.html")));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route(DEFAULT_ENDPOINT, post(create_checkout_session))
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let stripe = StripeClient::from_env().ok();

    if stripe.is_some() {
        tracing::info!("✓ Stripe configured");
    } else {
        tracing::warn!("⚠ Stripe not configured - checkout disabled");
        tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
    }

    for plan in Plan::ALL {
        let pricing = plan.pricing();
        tracing::info!("  Plan {}: {}", pricing.name, pricing.price_label());
    }

    let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist".into()));
    if !static_dir.join("index.html").exists() {
        tracing::warn!("⚠ {}/index.html not found - run `trunk build` in crates/cards-web", static_dir.display());
    }

    let state = AppState {
        stripe: stripe.map(Arc::new),
        static_dir,
    };

    let app = router(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 CleverCards running on http://{}", addr);
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  POST {:<21} - Create checkout session", DEFAULT_ENDPOINT);

    axum::serve(listener, app).await?;

    Ok(())
}
