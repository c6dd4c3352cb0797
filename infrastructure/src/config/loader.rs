//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["biosense.toml", ".biosense.toml"];

/// Unprefixed variables and the keys they set
const LEGACY_ENV: [(&str, &str); 2] = [
    ("GEMINI_MODEL", "gemini.model"),
    ("SYSTEM_INSTRUCTION", "gemini.system_instruction"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./biosense.toml` or `./.biosense.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/biosense-ai/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Load defaults plus environment overrides, skipping all files (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Merge the environment on top of `figment`.
    ///
    /// `GEMINI_MODEL` and `SYSTEM_INSTRUCTION` are the historical variable
    /// names and are taken as plain text; any other key can be set as
    /// `BIOSENSE_<SECTION>__<KEY>`.
    fn with_env(figment: Figment) -> Figment {
        let mut figment = figment.merge(Env::prefixed("BIOSENSE_").split("__"));

        for (var, key) in LEGACY_ENV {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/biosense-ai/config.toml if set,
    /// otherwise falls back to ~/.config/biosense-ai/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("biosense-ai").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     GEMINI_MODEL, SYSTEM_INSTRUCTION, BIOSENSE_<SECTION>__<KEY>");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./biosense.toml or ./.biosense.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
