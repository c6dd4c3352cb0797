//! CLI command definitions

use biosense_domain::{DetailLevel, Model, Tone};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for BioSense AI
#[derive(Parser, Debug)]
#[command(name = "biosense")]
#[command(author, version, about = "Scientific chat for biosensors, EIS and troponin, backed by Gemini")]
#[command(long_about = r#"
BioSense AI is an interactive chat for explaining and analysing
electrochemical impedance spectroscopy (EIS), biosensors and troponin
measurements. Every question is sent to Gemini together with the selected
tone and level of detail; the conversation keeps its memory until /new.

The Gemini API key is read from GEMINI_API_KEY (see [gemini] api_key_env).

Configuration files are loaded from (in priority order):
1. Environment        GEMINI_MODEL, SYSTEM_INSTRUCTION, BIOSENSE_<SECTION>__<KEY>
2. --config <path>    Explicit config file
3. ./biosense.toml    Project-level config
4. ~/.config/biosense-ai/config.toml   Global config

Example:
  biosense
  biosense --tone didactic --detail 4
  biosense --model gemini-2.5-pro --log-conversation eis.jsonl
"#)]
pub struct Cli {
    /// Response tone: technical, didactic or concise
    #[arg(long, value_name = "TONE")]
    pub tone: Option<Tone>,

    /// Level of detail, 1 to 5
    #[arg(long, value_name = "LEVEL")]
    pub detail: Option<DetailLevel>,

    /// Gemini model to use (overrides configuration)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<Model>,

    /// Append conversation events to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::try_parse_from([
            "biosense",
            "--tone",
            "didáctico",
            "--detail",
            "5",
            "--model",
            "gemini-2.5-pro",
            "-vv",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.tone, Some(Tone::Didactic));
        assert_eq!(cli.detail.map(|d| d.get()), Some(5));
        assert_eq!(cli.model, Some(Model::Gemini25Pro));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_rejects_out_of_range_detail() {
        assert!(Cli::try_parse_from(["biosense", "--detail", "6"]).is_err());
        assert!(Cli::try_parse_from(["biosense", "--tone", "loud"]).is_err());
    }
}
