//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Detail level must be between 1 and 5, got {0}")]
    InvalidDetailLevel(i64),

    #[error("Detail level must be a number between 1 and 5, got '{0}'")]
    DetailNotANumber(String),

    #[error("Unknown tone '{0}' (expected technical, didactic or concise)")]
    UnknownTone(String),

    #[error("Message is empty")]
    EmptyMessage,
}
