//! HTTP Handlers

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    Json,
};
use serde::{Deserialize, Serialize};

use cards_core::Plan;
use cards_payments::{CheckoutRequest, PaymentError};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub stripe_configured: bool,
}

/// Body of a successful session creation; the browser only reads `id`
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// `{"error": {"message": ...}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: ErrorDetail {
                message: message.into(),
            },
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        stripe_configured: state.stripe.is_some(),
    })
}

/// Create a Pro subscription checkout session
pub async fn create_checkout_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, ApiError> {
    let stripe = state
        .stripe
        .as_ref()
        .ok_or_else(|| api_error(StatusCode::SERVICE_UNAVAILABLE, "Payments not configured"))?;

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Missing origin header"))?;

    let request = CheckoutRequest {
        plan: Plan::Pro,
        origin: origin.to_string(),
    };

    let session = stripe.create_checkout_session(request).await.map_err(|e| {
        tracing::error!("Checkout error: {}", e);
        let status = match e {
            PaymentError::InvalidOrigin(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        api_error(status, e.user_message())
    })?;

    Ok(Json(SessionResponse {
        id: session.id,
        url: session.checkout_url,
    }))
}
