//! Domain layer for BioSense AI
//!
//! This crate contains the core entities and value objects of the tutoring
//! chat. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Transcript**: the ordered user/assistant turns of one session
//! - **PresentationOptions**: tone and detail level chosen by the user
//! - **PromptTemplate**: wraps user text in format instructions before it
//!   is sent to the model

pub mod config;
pub mod core;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, model::Model};
pub use prompt::{
    DetailLevel, PresentationOptions, PromptTemplate, Tone,
    presets::{EXAMPLE_QUESTIONS, QUICK_PROMPTS, quick_prompt},
};
pub use session::entities::{Role, Transcript, Turn};
