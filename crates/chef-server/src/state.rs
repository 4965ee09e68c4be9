//! Application state shared across all handlers.

use chef_llm::TextGenerator;
use chef_sanitizer::Sanitizer;
use chef_session::{ConversationStore, InMemoryStore, SessionLocks};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ConversationStore>,
    pub locks: Arc<SessionLocks>,
    pub generator: Arc<dyn TextGenerator>,
    pub sanitizer: Sanitizer,
    pub start_time: Instant,
}

impl AppState {
    /// State with a fresh in-memory conversation store.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_store(generator, Arc::new(InMemoryStore::new()))
    }

    pub fn with_store(generator: Arc<dyn TextGenerator>, store: Arc<dyn ConversationStore>) -> Self {
        Self {
            store,
            locks: Arc::new(SessionLocks::new()),
            generator,
            sanitizer: Sanitizer::new(),
            start_time: Instant::now(),
        }
    }

    pub fn api_configured(&self) -> bool {
        self.generator.is_configured()
    }
}
