//! Conversation log port.
//!
//! `tracing` carries diagnostics; this port carries the conversation itself
//! (contexts, turns, failed exchanges and resets) for later analysis.

use serde_json::Value;

/// Event type names written by the chat session.
pub mod events {
    pub const CONTEXT_CREATED: &str = "context_created";
    pub const USER_TURN: &str = "user_turn";
    pub const ASSISTANT_TURN: &str = "assistant_turn";
    pub const EXCHANGE_FAILED: &str = "exchange_failed";
    pub const CONVERSATION_RESET: &str = "conversation_reset";
}

/// One record of the conversation log: an event name from [`events`] plus
/// a JSON payload. The writer adds the timestamp.
pub struct ConversationEvent {
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// The `log` method is synchronous and non-fallible; logging failures never
/// interrupt the chat.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
