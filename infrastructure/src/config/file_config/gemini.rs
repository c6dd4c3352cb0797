//! Gemini provider configuration from TOML (`[gemini]` section)

use crate::config::error::ConfigError;
use biosense_domain::{ConfigIssue, ConfigIssueCode, Model, PromptTemplate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request timeout used when none (or zero) is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Raw Gemini configuration from TOML
///
/// # Example
///
/// ```toml
/// [gemini]
/// api_key_env = "GEMINI_API_KEY"
/// model = "gemini-2.5-flash"
/// system_instruction = "Eres un asistente útil y claro."
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Gemini API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// System instruction set once per conversation.
    pub system_instruction: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: Model::default().to_string(),
            system_instruction: PromptTemplate::default_system_instruction().to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the API key from the process environment.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key, reading variables through `lookup`.
    ///
    /// A direct `api_key` wins over the variable; empty values count as
    /// missing.
    pub fn resolve_api_key_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<String, ConfigError> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()))
            .map(|k| k.trim().to_string())
            .ok_or_else(|| ConfigError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            })
    }

    /// Parse the model, falling back to the default for an empty name.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        if self.model.trim().is_empty() {
            let issue = ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "gemini.model".to_string(),
                },
                format!(
                    "gemini.model: model name cannot be empty, using '{}'",
                    Model::default()
                ),
            );
            return (Model::default(), vec![issue]);
        }
        (Model::from(self.model.as_str()), Vec::new())
    }

    /// Request timeout, falling back to the default for zero.
    pub fn parse_timeout(&self) -> (Duration, Vec<ConfigIssue>) {
        if self.timeout_secs == 0 {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "gemini.timeout_secs".to_string(),
                    value: 0,
                },
                format!(
                    "gemini.timeout_secs: must be positive, using {}",
                    DEFAULT_TIMEOUT_SECS
                ),
            );
            return (Duration::from_secs(DEFAULT_TIMEOUT_SECS), vec![issue]);
        }
        (Duration::from_secs(self.timeout_secs), Vec::new())
    }

    /// System instruction, falling back to the default when blank.
    pub fn system_instruction(&self) -> String {
        if self.system_instruction.trim().is_empty() {
            PromptTemplate::default_system_instruction().to_string()
        } else {
            self.system_instruction.clone()
        }
    }
}
