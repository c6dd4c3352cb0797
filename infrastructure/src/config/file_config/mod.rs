//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain/application types
//! on demand, collecting [`ConfigIssue`]s instead of failing.

mod chat;
mod gemini;
mod logging;
mod repl;

pub use chat::FileChatConfig;
pub use gemini::{DEFAULT_TIMEOUT_SECS, FileGeminiConfig};
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;

use biosense_application::SessionParams;
use biosense_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API settings
    pub gemini: FileGeminiConfig,
    /// Initial presentation options
    pub chat: FileChatConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.gemini.parse_model().1);
        issues.extend(self.gemini.parse_timeout().1);
        issues.extend(self.chat.to_options().1);
        issues
    }

    /// Parameters for new chat sessions; invalid values fall back to defaults.
    pub fn session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_model(self.gemini.parse_model().0)
            .with_system_instruction(self.gemini.system_instruction())
            .with_initial_options(self.chat.to_options().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosense_domain::{Model, Tone};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "LAB_GEMINI_KEY"
model = "gemini-2.5-pro"
system_instruction = "Eres un tutor de biosensores."
timeout_secs = 30

[chat]
tone = "concise"
detail = 2

[repl]
show_progress = false
history_file = "~/.local/share/biosense-ai/history.txt"

[logging]
conversation_log = "chat.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key_env, "LAB_GEMINI_KEY");
        assert_eq!(config.gemini.timeout_secs, 30);
        assert!(!config.repl.show_progress);
        assert_eq!(config.logging.conversation_log.as_deref(), Some("chat.jsonl"));
        assert!(config.validate().is_empty());

        let params = config.session_params();
        assert_eq!(params.model, Model::Gemini25Pro);
        assert_eq!(params.system_instruction, "Eres un tutor de biosensores.");
        assert_eq!(params.initial_options.tone, Tone::Concise);
        assert_eq!(params.initial_options.detail.get(), 2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FileConfig = toml::from_str("[chat]\ntone = \"didactic\"\n").unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.chat.detail, 3);
        assert!(config.repl.show_progress);
        assert!(config.logging.conversation_log.is_none());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[gemini]
model = ""
timeout_secs = 0

[chat]
tone = "sarcastic"
detail = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 1);

        let params = config.session_params();
        assert_eq!(params.model, Model::default());
        assert_eq!(params.initial_options.tone, Tone::Technical);
    }
}
