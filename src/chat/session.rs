use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::chat::responder::{ReplyTopic, Responder, GREETING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Conversation transcript for one visitor
///
/// Opens with the bot greeting. Blank input is ignored, anything else appends
/// the user's message followed by the bot's canned reply.
#[derive(Debug, Clone)]
pub struct ChatSession {
    responder: Responder,
    messages: Vec<ChatMessage>,
    typing_delay: Duration,
}

impl ChatSession {
    pub fn new(responder: Responder, typing_delay: Duration) -> Self {
        Self {
            responder,
            messages: vec![ChatMessage::new(Sender::Bot, GREETING)],
            typing_delay,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record a user message and the reply, without waiting
    ///
    /// Returns the bot reply, or None when the input is blank.
    pub fn send(&mut self, input: &str) -> Option<(ReplyTopic, &ChatMessage)> {
        if input.trim().is_empty() {
            return None;
        }

        let (topic, reply) = self.responder.reply_for(input);
        let reply = reply.to_string();
        self.messages.push(ChatMessage::new(Sender::User, input));
        self.messages.push(ChatMessage::new(Sender::Bot, reply));
        self.messages.last().map(|msg| (topic, msg))
    }

    /// Like `send`, but waits the typing delay before the reply is recorded
    pub async fn send_with_delay(&mut self, input: &str) -> Option<(ReplyTopic, &ChatMessage)> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::new(Sender::User, input));
        tokio::time::sleep(self.typing_delay).await;

        let (topic, reply) = self.responder.reply_for(input);
        let reply = reply.to_string();
        self.messages.push(ChatMessage::new(Sender::Bot, reply));
        self.messages.last().map(|msg| (topic, msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ChatSession {
        ChatSession::new(Responder::default(), Duration::from_millis(1000))
    }

    #[test]
    fn test_session_opens_with_greeting() {
        let session = session();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert_eq!(session.messages()[0].content, GREETING);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = session();
        assert!(session.send("").is_none());
        assert!(session.send("   \n").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_send_appends_user_and_bot_messages() {
        let mut session = session();
        let (topic, reply) = session.send("Do you offer a trial?").unwrap();
        assert_eq!(topic, ReplyTopic::Trial);
        assert!(reply.content.contains("14-day free trial"));

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].content, "Do you offer a trial?");
        assert_eq!(messages[2].sender, Sender::Bot);
        assert_ne!(messages[1].id, messages[2].id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_with_delay_waits_typing_delay() {
        let mut session = session();
        let started = tokio::time::Instant::now();

        let (topic, _) = session.send_with_delay("support?").await.unwrap();

        assert_eq!(topic, ReplyTopic::Support);
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(session.messages().len(), 3);
    }
}
