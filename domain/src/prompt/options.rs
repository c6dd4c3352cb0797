//! Presentation options applied when composing a prompt

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Response tone requested from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Technical,
    Didactic,
    Concise,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Technical, Tone::Didactic, Tone::Concise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Technical => "technical",
            Tone::Didactic => "didactic",
            Tone::Concise => "concise",
        }
    }

    /// Label shown in the chat surface.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Technical => "Técnico",
            Tone::Didactic => "Didáctico",
            Tone::Concise => "Muy conciso",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = DomainError;

    /// Accepts the English names and the Spanish labels, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technical" | "tecnico" | "técnico" => Ok(Tone::Technical),
            "didactic" | "didactico" | "didáctico" => Ok(Tone::Didactic),
            "concise" | "conciso" | "muy conciso" => Ok(Tone::Concise),
            _ => Err(DomainError::UnknownTone(s.trim().to_string())),
        }
    }
}

/// Requested level of detail, 1 (minimal) to 5 (exhaustive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DetailLevel(u8);

impl DetailLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: i64) -> Result<Self, DomainError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(DomainError::InvalidDetailLevel(level))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for DetailLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for DetailLevel {
    type Error = DomainError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<DetailLevel> for u8 {
    fn from(level: DetailLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DetailLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::DetailNotANumber(s.trim().to_string()))?;
        Self::new(level)
    }
}

/// Formatting preferences chosen by the user for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresentationOptions {
    pub tone: Tone,
    pub detail: DetailLevel,
}

impl PresentationOptions {
    pub fn new(tone: Tone, detail: DetailLevel) -> Self {
        Self { tone, detail }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_detail(mut self, detail: DetailLevel) -> Self {
        self.detail = detail;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_parses_english_and_spanish() {
        assert_eq!("technical".parse::<Tone>().unwrap(), Tone::Technical);
        assert_eq!("Técnico".parse::<Tone>().unwrap(), Tone::Technical);
        assert_eq!("DIDACTIC".parse::<Tone>().unwrap(), Tone::Didactic);
        assert_eq!("didáctico".parse::<Tone>().unwrap(), Tone::Didactic);
        assert_eq!("Muy conciso".parse::<Tone>().unwrap(), Tone::Concise);
        assert_eq!(" concise ".parse::<Tone>().unwrap(), Tone::Concise);
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        let err = "poetic".parse::<Tone>().unwrap_err();
        assert_eq!(err, DomainError::UnknownTone("poetic".to_string()));
    }

    #[test]
    fn test_detail_level_bounds() {
        assert!(DetailLevel::new(0).is_err());
        assert_eq!(DetailLevel::new(1).unwrap().get(), 1);
        assert_eq!(DetailLevel::new(5).unwrap().get(), 5);
        assert_eq!(
            DetailLevel::new(6).unwrap_err(),
            DomainError::InvalidDetailLevel(6)
        );
    }

    #[test]
    fn test_detail_level_from_str() {
        assert_eq!("4".parse::<DetailLevel>().unwrap().get(), 4);
        assert!("cuatro".parse::<DetailLevel>().is_err());
        assert!("-1".parse::<DetailLevel>().is_err());
    }

    #[test]
    fn test_defaults_match_initial_controls() {
        let options = PresentationOptions::default();
        assert_eq!(options.tone, Tone::Technical);
        assert_eq!(options.detail.get(), 3);
    }

    #[test]
    fn test_detail_level_deserialize_validates() {
        let ok: DetailLevel = serde_json::from_str("2").unwrap();
        assert_eq!(ok.get(), 2);
        assert!(serde_json::from_str::<DetailLevel>("7").is_err());
    }
}
