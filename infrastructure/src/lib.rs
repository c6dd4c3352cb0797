//! Infrastructure layer for BioSense AI
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini REST gateway, configuration
//! file loading and the JSONL conversation logger.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, DEFAULT_TIMEOUT_SECS, FileChatConfig, FileConfig,
    FileGeminiConfig, FileLoggingConfig, FileReplConfig,
};
pub use gemini::{
    client::{GeminiClient, GeminiClientConfig},
    error::GeminiError,
    gateway::GeminiLlmGateway,
    session::GeminiSession,
};
pub use logging::JsonlConversationLogger;
