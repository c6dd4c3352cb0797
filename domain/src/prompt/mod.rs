//! Prompt domain
//!
//! Presentation options, the message wrapper template and the fixed prompts
//! offered by the chat surface.

mod options;
pub mod presets;
mod template;

pub use options::{DetailLevel, PresentationOptions, Tone};
pub use template::PromptTemplate;
