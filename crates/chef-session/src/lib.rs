//! Conversation history and prompt assembly for ChefBot.

pub mod prompt;
pub mod session;
pub mod store;

pub use prompt::{build_prompt, BOT_CUE, SYSTEM_PROMPT};
pub use session::*;
pub use store::{ClearOutcome, ConversationStore, InMemoryStore, SessionLocks};
