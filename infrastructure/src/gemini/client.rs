//! HTTP client for the Gemini REST API.

use super::error::{GeminiError, Result};
use super::protocol::{Content, ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use biosense_domain::Model;
use std::time::Duration;
use tracing::debug;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiClient`]
#[derive(Clone)]
pub struct GeminiClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Thin wrapper around `reqwest::Client` for `generateContent` calls.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("BioSenseAI/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeminiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint URL for `model`.
    pub fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }

    /// Run one `generateContent` call and return the reply text.
    pub async fn generate(
        &self,
        model: &Model,
        system_instruction: Option<&str>,
        contents: &[Content],
    ) -> Result<String> {
        let request = GenerateContentRequest {
            system_instruction: system_instruction
                .filter(|s| !s.trim().is_empty())
                .map(Content::instruction),
            contents,
        };

        debug!(
            model = %model,
            contents = contents.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .http
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_response(status, &body)
    }
}

/// Turn a raw HTTP status and body into reply text or a [`GeminiError`].
pub(crate) fn interpret_response(status: u16, body: &str) -> Result<String> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(GeminiError::Api { status, message });
    }

    let parsed: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GeminiError::ParseError {
            error: e.to_string(),
            raw: body.to_string(),
        })?;

    if let Some(reason) = parsed.block_reason() {
        return Err(GeminiError::Blocked(reason.to_string()));
    }

    parsed.text().ok_or(GeminiError::EmptyResponse)
}
