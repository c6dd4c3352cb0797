//! Fatal configuration errors

use thiserror::Error;

/// Configuration problems that stop the application before the chat starts
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Falta {env_var} en las variables de entorno o en el archivo de configuración ([gemini] api_key)."
    )]
    MissingApiKey { env_var: String },
}
