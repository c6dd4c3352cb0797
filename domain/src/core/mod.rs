//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the Gemini model a conversation is bound to
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
