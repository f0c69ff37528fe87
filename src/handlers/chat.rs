use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::chat::{ReplyTopic, Responder, GREETING};
use crate::error::AppError;
use crate::handlers::{ApiJson, AppState};
use crate::metrics;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub topic: ReplyTopic,
    pub reply: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatGreeting {
    pub greeting: String,
}

/// Handle GET /api/chat
pub async fn greeting() -> Json<ChatGreeting> {
    Json(ChatGreeting {
        greeting: GREETING.to_string(),
    })
}

/// Handle POST /api/chat
///
/// Waits the configured typing delay, then answers with the canned reply.
pub async fn reply(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::EmptyMessage);
    }

    let config = state.config.load_full();
    let responder = Responder::new(config.pricing.currency()?);

    tokio::time::sleep(Duration::from_millis(config.chat.reply_delay_ms)).await;

    let (topic, text) = responder.reply_for(&request.message);
    tracing::debug!(topic = topic.as_str(), "Answering chat message");
    metrics::record_chat_reply(topic.as_str());

    Ok(Json(ChatReply {
        topic,
        reply: text.to_string(),
        timestamp: Utc::now(),
    }))
}
