pub mod chat;
pub mod forms;
pub mod health;
pub mod metrics_handler;
pub mod pricing;

use arc_swap::ArcSwap;
use axum::extract::FromRequest;
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;

/// Application state
///
/// Only the configuration is shared; every request builds its own selection,
/// responder and submitter from the current snapshot.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
}

impl AppState {
    pub fn new(config: Arc<ArcSwap<Config>>) -> Self {
        Self { config }
    }
}

/// JSON request body whose rejections are reported as `AppError::BadRequest`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
