//! REPL input parsing
//!
//! Every line typed at the prompt becomes a [`ReplInput`]: either a
//! [`ChatAction`] for the session or a command the REPL answers itself.

use biosense_application::ChatAction;
use biosense_domain::{DetailLevel, DomainError, Tone};
use thiserror::Error;

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Forwarded to the chat session
    Action(ChatAction),
    /// `/prompts`
    ListPrompts,
    /// `/info`
    Info,
    /// `/help`
    Help,
    /// `/quit`
    Quit,
    /// Blank line
    Empty,
}

/// Errors for lines that cannot be turned into an input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Comando desconocido: {0} (usa /help)")]
    UnknownCommand(String),

    #[error("Uso: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    InvalidValue(#[from] DomainError),
}

/// Parse one line of REPL input.
///
/// Lines not starting with `/` are sent to the model as typed.
pub fn parse_input(line: &str) -> Result<ReplInput, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ReplInput::Empty);
    }

    let Some(command_line) = line.strip_prefix('/') else {
        return Ok(ReplInput::Action(ChatAction::SubmitText(line.to_string())));
    };

    let (command, argument) = match command_line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (command_line, ""),
    };

    // `/1` .. `/4`
    if let Ok(number) = command.parse::<usize>() {
        return Ok(ReplInput::Action(ChatAction::QuickPrompt(number)));
    }

    match command.to_lowercase().as_str() {
        "q" | "quick" => argument
            .parse::<usize>()
            .map(|number| ReplInput::Action(ChatAction::QuickPrompt(number)))
            .map_err(|_| CommandError::Usage("/q <número> (1-4)")),
        "prompts" => Ok(ReplInput::ListPrompts),
        "new" | "reset" => Ok(ReplInput::Action(ChatAction::Reset)),
        "tone" | "tono" => {
            if argument.is_empty() {
                return Err(CommandError::Usage("/tone technical|didactic|concise"));
            }
            let tone: Tone = argument.parse()?;
            Ok(ReplInput::Action(ChatAction::ChangeTone(tone)))
        }
        "detail" | "detalle" => {
            if argument.is_empty() {
                return Err(CommandError::Usage("/detail <1-5>"));
            }
            let detail: DetailLevel = argument.parse()?;
            Ok(ReplInput::Action(ChatAction::ChangeDetail(detail)))
        }
        "info" => Ok(ReplInput::Info),
        "help" | "h" | "?" => Ok(ReplInput::Help),
        "quit" | "exit" => Ok(ReplInput::Quit),
        _ => Err(CommandError::UnknownCommand(format!("/{}", command))),
    }
}
