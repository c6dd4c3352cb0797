//! Gemini LLM Gateway implementation

use super::client::{GeminiClient, GeminiClientConfig};
use super::session::GeminiSession;
use async_trait::async_trait;
use biosense_application::{GatewayError, LlmGateway, LlmSession};
use biosense_domain::Model;
use std::sync::Arc;
use tracing::info;

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiLlmGateway {
    client: Arc<GeminiClient>,
}

impl GeminiLlmGateway {
    pub fn new(config: GeminiClientConfig) -> Result<Self, GatewayError> {
        let base_url = config.base_url.clone();
        let client = GeminiClient::new(config)?;

        info!(base_url = %base_url, "GeminiLlmGateway initialized");

        Ok(Self {
            client: Arc::new(client),
        })
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        info!("Creating Gemini session with model: {}", model);
        Ok(Box::new(GeminiSession::new(
            Arc::clone(&self.client),
            model.clone(),
            system_prompt.to_string(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_create_session_binds_model() {
        let gateway = GeminiLlmGateway::new(GeminiClientConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        let session = gateway
            .create_session(&Model::Gemini25Pro, "Eres un tutor.")
            .await
            .unwrap();
        assert_eq!(session.model(), &Model::Gemini25Pro);
    }
}
