//! User actions understood by a chat session.
//!
//! The surface translates its controls into a [`ChatAction`] and renders
//! the returned [`ActionOutcome`]; nothing in here knows how either is shown.

use biosense_domain::{DetailLevel, PresentationOptions, Tone, Turn};

/// Closed set of actions the chat surface can trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Free text typed by the user
    SubmitText(String),
    /// A preset prompt, by its 1-based number
    QuickPrompt(usize),
    /// Start a new conversation
    Reset,
    ChangeTone(Tone),
    ChangeDetail(DetailLevel),
}

/// What an action did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The model answered; carries the new assistant turn
    Replied(Turn),
    ConversationReset,
    OptionsChanged(PresentationOptions),
}
