//! Session domain entities

use serde::{Deserialize, Serialize};

/// Author of a turn in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message of the conversation (Entity)
///
/// Turns are immutable once created; the transcript only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered history of the turns of one session
///
/// The first turn is always a user turn and an assistant turn only ever
/// directly follows a user turn. A user turn may stay unanswered (a failed
/// exchange), in which case the next user turn follows it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a turn of the given role may be appended next.
    pub fn accepts(&self, role: Role) -> bool {
        match role {
            Role::User => true,
            Role::Assistant => matches!(self.last().map(Turn::role), Some(Role::User)),
        }
    }

    /// Append a turn.
    ///
    /// # Panics
    ///
    /// Panics if an assistant turn does not directly follow a user turn.
    pub fn push(&mut self, turn: Turn) {
        assert!(
            self.accepts(turn.role()),
            "assistant turn must directly follow a user turn (transcript has {} turns)",
            self.turns.len()
        );
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// True when the last user turn has not been answered.
    pub fn has_unanswered_turn(&self) -> bool {
        matches!(self.last().map(Turn::role), Some(Role::User))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}
