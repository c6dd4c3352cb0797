//! Session parameters for conversation context setup.
//!
//! [`SessionParams`] groups the values a [`ChatSession`](crate::use_cases::chat::ChatSession)
//! needs when it creates a conversation context. They are read once at
//! startup and never change for the lifetime of the process.

use biosense_domain::{Model, PresentationOptions, PromptTemplate};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionParams {
    /// Model every conversation context is bound to.
    pub model: Model,
    /// Fixed system instruction set at context creation.
    pub system_instruction: String,
    /// Options a fresh session starts with.
    pub initial_options: PresentationOptions,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            system_instruction: PromptTemplate::default_system_instruction().to_string(),
            initial_options: PresentationOptions::default(),
        }
    }
}

impl SessionParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_initial_options(mut self, options: PresentationOptions) -> Self {
        self.initial_options = options;
        self
    }
}
