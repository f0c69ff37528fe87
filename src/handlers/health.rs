use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::handlers::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "move-landing",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness check endpoint
///
/// Nothing external to wait for; reports the live configuration so a reload
/// can be confirmed from outside.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config.load();
    (StatusCode::OK, Json(json!({
        "status": "ready",
        "service": "move-landing",
        "default_currency": config.pricing.default_currency,
        "chat_reply_delay_ms": config.chat.reply_delay_ms,
    })))
}
