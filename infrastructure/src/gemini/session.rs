//! Gemini conversation session.
//!
//! `generateContent` is stateless, so [`GeminiSession`] keeps the exchange
//! history locally and sends it in full with every request. An exchange is
//! only recorded once the model answered, so a failed request leaves the
//! history untouched.

use super::client::GeminiClient;
use super::protocol::Content;
use async_trait::async_trait;
use biosense_application::{GatewayError, LlmSession};
use biosense_domain::Model;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub struct GeminiSession {
    client: Arc<GeminiClient>,
    model: Model,
    system_instruction: String,
    /// Completed exchanges, alternating user/model
    history: Mutex<Vec<Content>>,
}

impl GeminiSession {
    pub fn new(client: Arc<GeminiClient>, model: Model, system_instruction: String) -> Self {
        Self {
            client,
            model,
            system_instruction,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Number of completed exchanges.
    pub async fn exchanges(&self) -> usize {
        self.history.lock().await.len() / 2
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let mut history = self.history.lock().await;

        let mut contents = history.clone();
        contents.push(Content::user(content));

        let reply = self
            .client
            .generate(&self.model, Some(&self.system_instruction), &contents)
            .await?;

        history.push(Content::user(content));
        history.push(Content::model(reply.clone()));
        debug!(
            model = %self.model,
            exchanges = history.len() / 2,
            "Gemini exchange recorded"
        );

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::client::GeminiClientConfig;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    const REPLY_ONE: &str =
        r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "uno"}]}}]}"#;
    const REPLY_TWO: &str =
        r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "dos"}]}}]}"#;
    const SERVER_ERROR: &str = r#"{"error": {"code": 500, "message": "Internal error"}}"#;

    /// Matches a request whose `contents` are exactly `turns`.
    fn contents(turns: Vec<Content>) -> Matcher {
        let json = serde_json::to_string(&turns).unwrap();
        let escaped: String = json
            .chars()
            .flat_map(|c| match c {
                '[' | ']' | '{' | '}' | '(' | ')' | '.' | '*' | '+' | '?' | '|' | '^' | '$'
                | '\\' => vec!['\\', c],
                _ => vec![c],
            })
            .collect();
        Matcher::Regex(format!("\"contents\":{}\\}}$", escaped))
    }

    fn session(base_url: String) -> GeminiSession {
        let client = GeminiClient::new(GeminiClientConfig {
            api_key: "test-key".to_string(),
            base_url,
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        GeminiSession::new(
            Arc::new(client),
            Model::Gemini25Flash,
            "Eres un asistente útil y claro.".to_string(),
        )
    }

    #[tokio::test]
    async fn test_history_is_resent_with_each_message() {
        let mut server = Server::new_async().await;
        let first = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(
                    r#""systemInstruction":\{"parts":\[\{"text":"Eres un asistente útil y claro\."\}\]\}"#
                        .to_string(),
                ),
                contents(vec![Content::user("primera")]),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(REPLY_ONE)
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("POST", PATH)
            .match_body(contents(vec![
                Content::user("primera"),
                Content::model("uno"),
                Content::user("segunda"),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(REPLY_TWO)
            .expect(1)
            .create_async()
            .await;

        let session = session(server.url());
        assert_eq!(session.send("primera").await.unwrap(), "uno");
        assert_eq!(session.send("segunda").await.unwrap(), "dos");
        assert_eq!(session.exchanges().await, 2);

        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_exchange_is_not_recorded() {
        let mut server = Server::new_async().await;
        let failing = server
            .mock("POST", PATH)
            .match_body(contents(vec![Content::user("primera")]))
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(SERVER_ERROR)
            .expect(1)
            .create_async()
            .await;
        let fresh = server
            .mock("POST", PATH)
            .match_body(contents(vec![Content::user("segunda")]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(REPLY_TWO)
            .expect(1)
            .create_async()
            .await;

        let session = session(server.url());
        let err = session.send("primera").await.unwrap_err();
        assert!(matches!(err, GatewayError::RequestFailed(m) if m.contains("Internal error")));
        assert_eq!(session.exchanges().await, 0);

        assert_eq!(session.send("segunda").await.unwrap(), "dos");
        failing.assert_async().await;
        fresh.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let session = session(format!("http://{}", addr));
        let err = session.send("hola").await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
