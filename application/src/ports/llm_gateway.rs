//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted model.

use async_trait::async_trait;
use biosense_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication rejected: {0}")]
    Authentication(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer opens conversations with
/// the model. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new conversation bound to `model` with a fixed system prompt
    async fn create_session(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active conversation with the model
///
/// The session owns whatever history the remote side needs; callers only
/// hand it the next message.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and wait for the complete response
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
