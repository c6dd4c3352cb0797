//! Error types for the Gemini adapter

use biosense_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Could not reach Gemini: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Prompt blocked by Gemini: {0}")]
    Blocked(String),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

impl GeminiError {
    /// Whether the API rejected the credential.
    ///
    /// Gemini answers an invalid key with HTTP 400 rather than 401, so the
    /// message is checked as well.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            GeminiError::Api { status, message } => {
                matches!(status, 401 | 403) || (*status == 400 && message.contains("API key"))
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeminiError::Timeout
        } else {
            GeminiError::Connection(e.to_string())
        }
    }
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        if e.is_auth_failure() {
            return GatewayError::Authentication(e.to_string());
        }
        match e {
            GeminiError::ClientBuild(msg) => GatewayError::Other(msg),
            GeminiError::Connection(msg) => GatewayError::ConnectionError(msg),
            GeminiError::Timeout => GatewayError::Timeout,
            GeminiError::Api { status: 404, message } => GatewayError::ModelNotAvailable(message),
            GeminiError::EmptyResponse => GatewayError::EmptyResponse,
            other => GatewayError::RequestFailed(other.to_string()),
        }
    }
}
