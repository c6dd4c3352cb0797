//! Presentation-level configuration
//!
//! Configuration for REPL behavior, built by the binary from the
//! `[repl]` section of the configuration file.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while waiting for the model
    pub show_progress: bool,
    /// Path to the line-editor history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Where the line-editor history is kept.
    ///
    /// A configured path may start with `~/`; without one the history goes
    /// to `$XDG_DATA_HOME/biosense-ai/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => Some(expand_home(path)),
            _ => dirs::data_dir().map(|p| p.join("biosense-ai").join("history.txt")),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_file() {
        let config = ReplConfig {
            history_file: Some("/tmp/biosense-history.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/biosense-history.txt"))
        );
    }

    #[test]
    fn test_home_is_expanded() {
        let config = ReplConfig {
            history_file: Some("~/biosense/history.txt".to_string()),
            ..Default::default()
        };
        let path = config.history_path().unwrap();
        assert!(!path.starts_with("~"));
        assert!(path.ends_with("biosense/history.txt"));
    }

    #[test]
    fn test_default_history_lives_in_data_dir() {
        if let Some(path) = ReplConfig::default().history_path() {
            assert!(path.ends_with("biosense-ai/history.txt"));
        }
    }
}
