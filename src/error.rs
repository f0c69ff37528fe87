use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::forms::FormError;
use crate::pricing::PricingError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Currency code outside KWD, AED, INR, USD
    InvalidCurrency(String),
    /// Module name outside the catalog
    UnknownModule(String),
    /// Form payload failed validation
    ValidationError(String),
    /// Chat message was blank
    EmptyMessage,
    /// Request body missing, not JSON, or the wrong shape
    BadRequest(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCurrency(code) => write!(f, "Invalid currency: {}", code),
            Self::UnknownModule(name) => write!(f, "Unknown module: {}", name),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::EmptyMessage => write!(f, "Message cannot be empty"),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidCurrency(_)
            | Self::UnknownModule(_)
            | Self::ValidationError(_)
            | Self::EmptyMessage
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::InvalidCurrency(_) => "invalid_currency",
        AppError::UnknownModule(_) => "unknown_module",
        AppError::ValidationError(_) => "validation_error",
        AppError::EmptyMessage => "empty_message",
        AppError::BadRequest(_) => "bad_request",
        AppError::InternalError(_) => "internal_error",
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::InvalidCurrency(code) => Self::InvalidCurrency(code),
            PricingError::UnknownModule(name) => Self::UnknownModule(name),
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
