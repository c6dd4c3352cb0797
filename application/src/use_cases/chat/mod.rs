//! Chat use case: session store, remote exchange and action dispatch.

mod action;
mod session;

pub use action::{ActionOutcome, ChatAction};
pub use session::{ChatError, ChatSession, SessionState};
