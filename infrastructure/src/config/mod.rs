//! Configuration file loading for BioSense AI
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `GEMINI_MODEL`, `SYSTEM_INSTRUCTION`, `BIOSENSE_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./biosense.toml` or `./.biosense.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/biosense-ai/config.toml`
//! 5. Default values
//!
//! The API key is never merged into the configuration; it is read from the
//! variable named by `gemini.api_key_env` when the gateway is built.

pub mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    DEFAULT_TIMEOUT_SECS, FileChatConfig, FileConfig, FileGeminiConfig, FileLoggingConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
