//! Chat session use case.
//!
//! [`ChatSession`] holds the transcript and the conversation context of one
//! user session and runs the compose → send → append cycle.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --initialize()--> Ready --submit()--> Ready
//!       ^                                               |
//!       +------------------- reset() -------------------+
//! ```
//!
//! Every mutating method takes `&mut self`, so a second submission cannot
//! start while one is still waiting for the model.

use super::action::{ActionOutcome, ChatAction};
use crate::config::SessionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crate::ports::progress::ExchangeProgress;
use biosense_domain::util::preview;
use biosense_domain::{
    DetailLevel, DomainError, Model, PresentationOptions, PromptTemplate, Role, Tone, Transcript,
    Turn, quick_prompt,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Errors surfaced by a chat session.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Remote exchange failed: {0}")]
    RemoteExchange(#[from] GatewayError),

    #[error("No response from model")]
    EmptyResponse,

    #[error("Unknown quick prompt #{0}")]
    UnknownQuickPrompt(usize),

    #[error(transparent)]
    InvalidInput(#[from] DomainError),
}

/// Whether the session currently holds a conversation context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
}

/// Opaque handle to the remote conversation, tagged with a local id.
struct ConversationContext {
    id: Uuid,
    handle: Box<dyn LlmSession>,
}

/// Transcript and conversation context of one user session.
pub struct ChatSession {
    gateway: Arc<dyn LlmGateway>,
    params: SessionParams,
    options: PresentationOptions,
    transcript: Transcript,
    context: Option<ConversationContext>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatSession {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: SessionParams) -> Self {
        Self {
            gateway,
            options: params.initial_options,
            params,
            transcript: Transcript::new(),
            context: None,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn state(&self) -> SessionState {
        if self.context.is_some() {
            SessionState::Ready
        } else {
            SessionState::Uninitialized
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn options(&self) -> PresentationOptions {
        self.options
    }

    pub fn model(&self) -> &Model {
        &self.params.model
    }

    /// Id of the current conversation context, if one exists.
    pub fn context_id(&self) -> Option<Uuid> {
        self.context.as_ref().map(|c| c.id)
    }

    /// Create the conversation context if there is none yet.
    ///
    /// Calling this while a context exists does nothing.
    pub async fn initialize(&mut self) -> Result<(), ChatError> {
        if self.context.is_some() {
            return Ok(());
        }

        let handle = self
            .gateway
            .create_session(&self.params.model, &self.params.system_instruction)
            .await?;
        let id = Uuid::new_v4();

        info!(context_id = %id, model = %self.params.model, "Conversation context created");
        self.conversation_logger.log(ConversationEvent::new(
            events::CONTEXT_CREATED,
            serde_json::json!({
                "context_id": id.to_string(),
                "model": self.params.model.to_string(),
            }),
        ));

        self.context = Some(ConversationContext { id, handle });
        Ok(())
    }

    /// Drop the conversation context and the transcript together.
    pub fn reset(&mut self) {
        let previous = self.context.take().map(|c| c.id);
        let dropped_turns = self.transcript.len();
        self.transcript = Transcript::new();

        info!(
            context_id = ?previous,
            dropped_turns, "Conversation reset"
        );
        self.conversation_logger.log(ConversationEvent::new(
            events::CONVERSATION_RESET,
            serde_json::json!({
                "context_id": previous.map(|id| id.to_string()),
                "dropped_turns": dropped_turns,
            }),
        ));
    }

    /// Append a turn to the transcript.
    ///
    /// # Panics
    ///
    /// Panics if an assistant turn does not directly follow a user turn.
    pub fn append_turn(&mut self, turn: Turn) {
        self.conversation_logger.log(ConversationEvent::new(
            match turn.role() {
                Role::User => events::USER_TURN,
                Role::Assistant => events::ASSISTANT_TURN,
            },
            serde_json::json!({
                "context_id": self.context_id().map(|id| id.to_string()),
                "bytes": turn.content().len(),
                "text": turn.content(),
            }),
        ));
        self.transcript.push(turn);
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.options = self.options.with_tone(tone);
    }

    pub fn set_detail(&mut self, detail: DetailLevel) {
        self.options = self.options.with_detail(detail);
    }

    /// Send `text` to the model and record the exchange.
    ///
    /// The user turn is appended before the remote call. On failure it stays
    /// in the transcript without an answer and the error is returned.
    pub async fn submit(
        &mut self,
        text: &str,
        progress: &dyn ExchangeProgress,
    ) -> Result<Turn, ChatError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyMessage.into());
        }

        let composed = PromptTemplate::compose(text, &self.options);
        self.append_turn(Turn::user(text));

        info!(
            "Sending message ({}, detail {}): {}",
            self.options.tone,
            self.options.detail,
            preview(text, 80)
        );

        progress.on_exchange_start(&self.params.model);
        let result = self.exchange(&composed).await;
        progress.on_exchange_end(result.is_ok());

        match result {
            Ok(answer) => {
                let turn = Turn::assistant(answer);
                self.append_turn(turn.clone());
                Ok(turn)
            }
            Err(e) => {
                warn!("Exchange failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    events::EXCHANGE_FAILED,
                    serde_json::json!({
                        "context_id": self.context_id().map(|id| id.to_string()),
                        "error": e.to_string(),
                    }),
                ));
                Err(e)
            }
        }
    }

    async fn exchange(&mut self, composed: &str) -> Result<String, ChatError> {
        self.initialize().await?;
        let Some(context) = self.context.as_ref() else {
            return Err(GatewayError::Other("conversation context missing".to_string()).into());
        };

        debug!(
            context_id = %context.id,
            bytes = composed.len(),
            "Submitting composed prompt"
        );
        let answer = context.handle.send(composed).await?;
        if answer.trim().is_empty() {
            return Err(ChatError::EmptyResponse);
        }
        Ok(answer)
    }

    /// Apply one surface action.
    pub async fn dispatch(
        &mut self,
        action: ChatAction,
        progress: &dyn ExchangeProgress,
    ) -> Result<ActionOutcome, ChatError> {
        match action {
            ChatAction::SubmitText(text) => {
                let turn = self.submit(&text, progress).await?;
                Ok(ActionOutcome::Replied(turn))
            }
            ChatAction::QuickPrompt(number) => {
                let text = quick_prompt(number).ok_or(ChatError::UnknownQuickPrompt(number))?;
                let turn = self.submit(text, progress).await?;
                Ok(ActionOutcome::Replied(turn))
            }
            ChatAction::Reset => {
                self.reset();
                Ok(ActionOutcome::ConversationReset)
            }
            ChatAction::ChangeTone(tone) => {
                self.set_tone(tone);
                Ok(ActionOutcome::OptionsChanged(self.options))
            }
            ChatAction::ChangeDetail(detail) => {
                self.set_detail(detail);
                Ok(ActionOutcome::OptionsChanged(self.options))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use biosense_domain::QUICK_PROMPTS;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    type Script = Arc<Mutex<VecDeque<Result<String, GatewayError>>>>;

    struct MockSession {
        model: Model,
        script: Script,
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmSession for MockSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.sent.lock().unwrap().push(content.to_string());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
        }
    }

    struct MockGateway {
        script: Script,
        sent: Arc<Mutex<Vec<String>>>,
        system_prompts: Mutex<Vec<String>>,
        sessions_created: AtomicUsize,
        fail_create: bool,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                script: Arc::new(Mutex::new(VecDeque::from(responses))),
                sent: Arc::new(Mutex::new(Vec::new())),
                system_prompts: Mutex::new(Vec::new()),
                sessions_created: AtomicUsize::new(0),
                fail_create: false,
            }
        }

        fn replying(answers: &[&str]) -> Self {
            Self::new(answers.iter().map(|a| Ok(a.to_string())).collect())
        }

        fn unreachable() -> Self {
            Self {
                fail_create: true,
                ..Self::new(vec![])
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn create_session(
            &self,
            model: &Model,
            system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            if self.fail_create {
                return Err(GatewayError::ConnectionError("offline".to_string()));
            }
            self.sessions_created.fetch_add(1, Ordering::SeqCst);
            self.system_prompts
                .lock()
                .unwrap()
                .push(system_prompt.to_string());
            Ok(Box::new(MockSession {
                model: model.clone(),
                script: self.script.clone(),
                sent: self.sent.clone(),
            }))
        }
    }

    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn session_with(gateway: &Arc<MockGateway>) -> ChatSession {
        ChatSession::new(gateway.clone(), SessionParams::default())
    }

    fn roles(session: &ChatSession) -> Vec<Role> {
        session.transcript().iter().map(Turn::role).collect()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let mut session = session_with(&gateway);
        assert_eq!(session.state(), SessionState::Uninitialized);

        session.initialize().await.unwrap();
        let first = session.context_id();
        session.initialize().await.unwrap();

        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.context_id(), first);
        assert_eq!(gateway.sessions_created.load(Ordering::SeqCst), 1);
        assert_eq!(
            gateway.system_prompts.lock().unwrap().as_slice(),
            ["Eres un asistente útil y claro."]
        );
    }

    #[tokio::test]
    async fn test_submit_appends_user_then_assistant() {
        let gateway = Arc::new(MockGateway::replying(&["Rct aumenta."]));
        let mut session = session_with(&gateway);

        let turn = session
            .submit("¿Cómo cambia Rct?", &NoProgress)
            .await
            .unwrap();

        assert_eq!(turn, Turn::assistant("Rct aumenta."));
        assert_eq!(roles(&session), vec![Role::User, Role::Assistant]);
        assert_eq!(session.transcript().turns()[0].content(), "¿Cómo cambia Rct?");
        assert_eq!(session.state(), SessionState::Ready);
    }

    #[tokio::test]
    async fn test_submit_sends_composed_prompt_not_raw_text() {
        let gateway = Arc::new(MockGateway::replying(&["ok"]));
        let mut session = session_with(&gateway);
        let text = "Interpreta Rs=50Ω, Rct=120Ω, Cdl=20µF";

        session.submit(text, &NoProgress).await.unwrap();

        let sent = gateway.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            PromptTemplate::compose(text, &PresentationOptions::default())
        );
        assert!(sent[0].contains("3/5"));
    }

    #[tokio::test]
    async fn test_successful_cycles_alternate_and_stay_even() {
        let gateway = Arc::new(MockGateway::replying(&["uno", "dos", "tres"]));
        let mut session = session_with(&gateway);

        for question in ["a", "b", "c"] {
            session.submit(question, &NoProgress).await.unwrap();
            assert_eq!(session.transcript().len() % 2, 0);
        }

        assert_eq!(
            roles(&session),
            vec![
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant
            ]
        );
        assert_eq!(gateway.sessions_created.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_exchange_leaves_unpaired_user_turn() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Timeout)]));
        let mut session = session_with(&gateway);

        let err = session.submit("¿Qué es EIS?", &NoProgress).await.unwrap_err();

        assert!(matches!(err, ChatError::RemoteExchange(GatewayError::Timeout)));
        assert_eq!(roles(&session), vec![Role::User]);
        assert!(session.transcript().has_unanswered_turn());
    }

    #[tokio::test]
    async fn test_session_continues_after_failure() {
        let gateway = Arc::new(MockGateway::new(vec![
            Err(GatewayError::RequestFailed("503".to_string())),
            Ok("Ahora sí.".to_string()),
        ]));
        let mut session = session_with(&gateway);

        assert!(session.submit("primera", &NoProgress).await.is_err());
        session.submit("segunda", &NoProgress).await.unwrap();

        assert_eq!(roles(&session), vec![Role::User, Role::User, Role::Assistant]);
    }

    #[tokio::test]
    async fn test_unreachable_gateway_keeps_user_turn() {
        let gateway = Arc::new(MockGateway::unreachable());
        let mut session = session_with(&gateway);

        let err = session.submit("hola", &NoProgress).await.unwrap_err();

        assert!(matches!(
            err,
            ChatError::RemoteExchange(GatewayError::ConnectionError(_))
        ));
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert_eq!(roles(&session), vec![Role::User]);
    }

    #[tokio::test]
    async fn test_blank_reply_is_empty_response() {
        let gateway = Arc::new(MockGateway::replying(&["   "]));
        let mut session = session_with(&gateway);

        let err = session.submit("hola", &NoProgress).await.unwrap_err();

        assert!(matches!(err, ChatError::EmptyResponse));
        assert_eq!(roles(&session), vec![Role::User]);
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_without_turn() {
        let gateway = Arc::new(MockGateway::replying(&["ok"]));
        let mut session = session_with(&gateway);

        let err = session.submit("  \n", &NoProgress).await.unwrap_err();

        assert!(matches!(
            err,
            ChatError::InvalidInput(DomainError::EmptyMessage)
        ));
        assert!(session.transcript().is_empty());
        assert!(gateway.sent().is_empty());
    }

    #[tokio::test]
    async fn test_reset_clears_and_next_initialize_creates_new_context() {
        let gateway = Arc::new(MockGateway::replying(&["ok"]));
        let mut session = session_with(&gateway);
        session.submit("hola", &NoProgress).await.unwrap();
        let before = session.context_id().unwrap();

        session.reset();
        assert!(session.transcript().is_empty());
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert_eq!(session.context_id(), None);

        session.initialize().await.unwrap();
        let after = session.context_id().unwrap();
        assert_ne!(before, after);
        assert_eq!(gateway.sessions_created.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_quick_prompt_matches_typed_text() {
        let preset = "Explica impedancia electroquímica aplicada a troponina.";
        assert_eq!(QUICK_PROMPTS[0], preset);

        let clicked_gateway = Arc::new(MockGateway::replying(&["respuesta"]));
        let mut clicked = session_with(&clicked_gateway);
        let clicked_outcome = clicked
            .dispatch(ChatAction::QuickPrompt(1), &NoProgress)
            .await
            .unwrap();

        let typed_gateway = Arc::new(MockGateway::replying(&["respuesta"]));
        let mut typed = session_with(&typed_gateway);
        let typed_outcome = typed
            .dispatch(ChatAction::SubmitText(preset.to_string()), &NoProgress)
            .await
            .unwrap();

        assert_eq!(clicked_outcome, typed_outcome);
        assert_eq!(clicked.transcript(), typed.transcript());
        assert_eq!(clicked_gateway.sent(), typed_gateway.sent());
    }

    #[tokio::test]
    async fn test_unknown_quick_prompt() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let mut session = session_with(&gateway);

        let err = session
            .dispatch(ChatAction::QuickPrompt(9), &NoProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::UnknownQuickPrompt(9)));
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_option_changes_apply_to_next_prompt() {
        let gateway = Arc::new(MockGateway::replying(&["ok"]));
        let mut session = session_with(&gateway);

        let outcome = session
            .dispatch(ChatAction::ChangeTone(Tone::Didactic), &NoProgress)
            .await
            .unwrap();
        assert!(matches!(outcome, ActionOutcome::OptionsChanged(o) if o.tone == Tone::Didactic));

        let detail = DetailLevel::new(5).unwrap();
        session
            .dispatch(ChatAction::ChangeDetail(detail), &NoProgress)
            .await
            .unwrap();

        session.submit("Nyquist", &NoProgress).await.unwrap();
        let sent = gateway.sent();
        assert!(sent[0].contains(PromptTemplate::style_instruction(Tone::Didactic)));
        assert!(sent[0].contains("5/5"));
    }

    #[tokio::test]
    async fn test_dispatch_reset_outcome() {
        let gateway = Arc::new(MockGateway::replying(&["ok"]));
        let mut session = session_with(&gateway);
        session.submit("hola", &NoProgress).await.unwrap();

        let outcome = session
            .dispatch(ChatAction::Reset, &NoProgress)
            .await
            .unwrap();

        assert_eq!(outcome, ActionOutcome::ConversationReset);
        assert!(session.transcript().is_empty());
        // Options survive a reset
        assert_eq!(session.options(), PresentationOptions::default());
    }

    #[tokio::test]
    async fn test_conversation_events_are_logged() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("ok".to_string()),
            Err(GatewayError::Timeout),
        ]));
        let logger = Arc::new(RecordingLogger {
            events: Mutex::new(Vec::new()),
        });
        let mut session = session_with(&gateway).with_conversation_logger(logger.clone());

        session.submit("uno", &NoProgress).await.unwrap();
        let _ = session.submit("dos", &NoProgress).await;
        session.reset();

        assert_eq!(
            logger.events.lock().unwrap().as_slice(),
            [
                "user_turn",
                "context_created",
                "assistant_turn",
                "user_turn",
                "exchange_failed",
                "conversation_reset"
            ]
        );
    }
}
