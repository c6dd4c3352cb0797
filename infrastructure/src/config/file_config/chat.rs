//! Chat presentation defaults from TOML (`[chat]` section)

use biosense_domain::{
    ConfigIssue, ConfigIssueCode, DetailLevel, PresentationOptions, Tone,
};
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
///
/// ```toml
/// [chat]
/// tone = "didactic"   # technical | didactic | concise
/// detail = 4          # 1..=5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    pub tone: String,
    pub detail: i64,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            tone: Tone::default().to_string(),
            detail: i64::from(DetailLevel::default().get()),
        }
    }
}

impl FileChatConfig {
    pub fn parse_tone(&self) -> (Tone, Vec<ConfigIssue>) {
        match self.tone.parse::<Tone>() {
            Ok(tone) => (tone, Vec::new()),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "chat.tone".to_string(),
                        value: self.tone.clone(),
                        valid_values: Tone::ALL.iter().map(|t| t.to_string()).collect(),
                    },
                    format!(
                        "chat.tone: unknown value '{}', falling back to '{}'",
                        self.tone,
                        Tone::default()
                    ),
                );
                (Tone::default(), vec![issue])
            }
        }
    }

    pub fn parse_detail(&self) -> (DetailLevel, Vec<ConfigIssue>) {
        match DetailLevel::new(self.detail) {
            Ok(level) => (level, Vec::new()),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::OutOfRange {
                        field: "chat.detail".to_string(),
                        value: self.detail,
                    },
                    format!(
                        "chat.detail: {} is outside 1..=5, falling back to {}",
                        self.detail,
                        DetailLevel::default()
                    ),
                );
                (DetailLevel::default(), vec![issue])
            }
        }
    }

    /// Options a new session starts with.
    pub fn to_options(&self) -> (PresentationOptions, Vec<ConfigIssue>) {
        let (tone, mut issues) = self.parse_tone();
        let (detail, detail_issues) = self.parse_detail();
        issues.extend(detail_issues);
        (PresentationOptions::new(tone, detail), issues)
    }
}
