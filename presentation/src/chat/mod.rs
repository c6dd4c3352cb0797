//! Interactive chat module
//!
//! Provides a readline-based chat interface for BioSense AI.

mod command;
mod repl;

pub use command::{CommandError, ReplInput, parse_input};
pub use repl::ChatRepl;
