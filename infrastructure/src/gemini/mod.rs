//! Gemini adapter.
//!
//! Implements the [`LlmGateway`](biosense_application::LlmGateway) port on
//! top of the `generateContent` REST endpoint.

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
