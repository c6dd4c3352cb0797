//! Line-editor settings from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw `[repl]` section
///
/// ```toml
/// [repl]
/// show_progress = false
/// history_file = "~/.local/share/biosense-ai/history.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Spinner while Gemini is answering
    pub show_progress: bool,
    /// Line-editor history; the data dir is used when unset or blank
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Configured history path, ignoring blank values.
    pub fn history_file(&self) -> Option<&str> {
        self.history_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}
