//! Command implementations for the CLI
//!
//! - start: Start the API server
//! - quote: Print a pricing quote
//! - chat: Talk to the chat assistant
//! - test: Test configuration validity
//! - config: Configuration display and validation

pub mod chat;
pub mod config;
pub mod quote;
pub mod start;
