//! Chat session domain.
//!
//! - [`entities::Turn`]: a single message of the conversation
//! - [`entities::Transcript`]: the append-only, ordered history of turns

pub mod entities;
