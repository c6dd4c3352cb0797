//! REPL (Read-Eval-Print Loop) for the interactive chat

use super::command::{ReplInput, parse_input};
use crate::ConsoleFormatter;
use crate::{ProgressReporter, SimpleProgress};
use biosense_application::{
    ActionOutcome, ChatAction, ChatSession, ExchangeProgress, NoProgress,
};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};

/// What the loop does with one evaluated line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Evaluation {
    Print(String),
    Error(String),
    Nothing,
    Quit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    progress: Box<dyn ExchangeProgress>,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl driving `session`
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            progress: Box::new(ProgressReporter::new()),
            history_path: None,
        }
    }

    /// Set whether to show progress while waiting for the model
    ///
    /// Falls back to plain-text progress when stderr is not a terminal.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.progress = match (show, std::io::stderr().is_terminal()) {
            (false, _) => Box::new(NoProgress),
            (true, true) => Box::new(ProgressReporter::new()),
            (true, false) => Box::new(SimpleProgress),
        };
        self
    }

    /// Set where the line-editor history is persisted
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        // The conversation context exists from the first screen on; a
        // failure here is retried by the first submission.
        if let Err(e) = self.session.initialize().await {
            warn!("Could not create conversation context: {}", e);
            eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
        }

        println!("{}", ConsoleFormatter::hero(self.session.model()));
        if self.session.transcript().is_empty() {
            println!("{}", ConsoleFormatter::landing());
        }
        println!("Escribe tu mensaje… (ej. 'Interpreta Rs=50Ω, Rct=120Ω, Cdl=20µF'), /help para ayuda");

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.trim());
                    }

                    match self.evaluate(&line).await {
                        Evaluation::Print(output) => println!("{}", output),
                        Evaluation::Error(message) => {
                            eprintln!("{}", ConsoleFormatter::error(&message))
                        }
                        Evaluation::Nothing => {}
                        Evaluation::Quit => {
                            println!("¡Hasta luego!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("¡Hasta luego!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    async fn evaluate(&mut self, line: &str) -> Evaluation {
        let input = match parse_input(line) {
            Ok(input) => input,
            Err(e) => return Evaluation::Error(e.to_string()),
        };
        debug!(?input, "REPL input");

        match input {
            ReplInput::Empty => Evaluation::Nothing,
            ReplInput::Quit => Evaluation::Quit,
            ReplInput::Help => Evaluation::Print(ConsoleFormatter::help()),
            ReplInput::ListPrompts => Evaluation::Print(ConsoleFormatter::quick_prompts()),
            ReplInput::Info => Evaluation::Print(ConsoleFormatter::info(
                self.session.model(),
                &self.session.options(),
                self.session.transcript().len(),
            )),
            ReplInput::Action(action) => {
                // A typed question is already on screen; a quick prompt is not.
                let echo_question = matches!(action, ChatAction::QuickPrompt(_));
                match self.session.dispatch(action, self.progress.as_ref()).await {
                    Ok(ActionOutcome::Replied(_)) if echo_question => {
                        let turns = self.session.transcript().turns();
                        let exchange = &turns[turns.len().saturating_sub(2)..];
                        Evaluation::Print(ConsoleFormatter::turns(exchange))
                    }
                    Ok(ActionOutcome::Replied(turn)) => {
                        Evaluation::Print(ConsoleFormatter::turn(&turn))
                    }
                    Ok(ActionOutcome::ConversationReset) => Evaluation::Print(format!(
                        "{}\n{}",
                        ConsoleFormatter::conversation_reset(),
                        ConsoleFormatter::landing()
                    )),
                    Ok(ActionOutcome::OptionsChanged(options)) => {
                        Evaluation::Print(ConsoleFormatter::options_changed(&options))
                    }
                    Err(e) => Evaluation::Error(e.to_string()),
                }
            }
        }
    }
}
