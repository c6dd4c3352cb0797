//! Application-level configuration.
//!
//! - [`SessionParams`]: what a new conversation context is bound to and
//!   the presentation options a session starts with

pub mod session_params;

pub use session_params::SessionParams;
