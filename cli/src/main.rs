//! CLI entrypoint for BioSense AI
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use biosense_application::{ChatSession, ConversationLogger};
use biosense_domain::Severity;
use biosense_infrastructure::{
    ConfigLoader, FileConfig, GeminiClientConfig, GeminiLlmGateway, JsonlConversationLogger,
};
use biosense_presentation::{ChatRepl, Cli, ConsoleFormatter, ReplConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting BioSense AI");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;

    report_config_issues(&config);

    // Missing credential halts before the chat surface appears
    let api_key = match config.gemini.resolve_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut params = config.session_params();
    if let Some(model) = cli.model.clone() {
        params = params.with_model(model);
    }
    let mut options = params.initial_options;
    if let Some(tone) = cli.tone {
        options = options.with_tone(tone);
    }
    if let Some(detail) = cli.detail {
        options = options.with_detail(detail);
    }
    let params = params.with_initial_options(options);

    // === Dependency Injection ===
    let (timeout, _) = config.gemini.parse_timeout();
    let gateway = Arc::new(GeminiLlmGateway::new(GeminiClientConfig {
        api_key,
        base_url: config.gemini.base_url.clone(),
        timeout,
    })?);

    let mut session = ChatSession::new(gateway, params);

    let log_path = cli
        .log_conversation
        .clone()
        .or_else(|| config.logging.conversation_log.as_ref().map(PathBuf::from));
    if let Some(path) = log_path {
        match JsonlConversationLogger::new(&path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                session = session.with_conversation_logger(logger);
            }
            None => warn!("Conversation logging disabled"),
        }
    }

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress,
        history_file: config.repl.history_file().map(str::to_string),
    };

    let mut repl = ChatRepl::new(session)
        .with_progress(repl_config.show_progress && !cli.quiet)
        .with_history_file(repl_config.history_path());

    repl.run().await?;
    Ok(ExitCode::SUCCESS)
}

/// Print configuration issues; invalid values already fell back to defaults
fn report_config_issues(config: &FileConfig) {
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => eprintln!("{}", ConsoleFormatter::error(&issue.message)),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
}
