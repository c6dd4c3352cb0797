//! Application layer for BioSense AI
//!
//! This crate contains the chat session use case, port definitions and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{ExchangeProgress, NoProgress},
};
pub use use_cases::chat::{ActionOutcome, ChatAction, ChatError, ChatSession, SessionState};
