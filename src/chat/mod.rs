pub mod responder;
pub mod session;

pub use responder::{ReplyTopic, Responder, GREETING};
pub use session::{ChatMessage, ChatSession, Sender};
