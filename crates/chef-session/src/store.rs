//! Conversation store: session id → turn history, held in process memory.

use crate::session::{Conversation, Turn, MAX_TURNS};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Result of clearing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    NotFound,
}

/// Storage seam for conversation history.
pub trait ConversationStore: Send + Sync {
    /// Return the session's turns, creating an empty session if it does not exist.
    fn get(&self, session_id: &str) -> Vec<Turn>;

    /// Append one exchange, then apply the turn cap.
    fn append(&self, session_id: &str, user_text: &str, bot_text: &str);

    /// Drop the session entirely.
    fn clear(&self, session_id: &str) -> ClearOutcome;

    /// Number of sessions currently held.
    fn session_count(&self) -> usize;
}

pub struct InMemoryStore {
    sessions: Mutex<HashMap<String, Conversation>>,
    max_turns: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_max_turns(MAX_TURNS)
    }

    pub fn with_max_turns(max_turns: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            max_turns,
        }
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore for InMemoryStore {
    fn get(&self, session_id: &str) -> Vec<Turn> {
        self.sessions
            .lock()
            .entry(session_id.to_string())
            .or_default()
            .turns
            .clone()
    }

    fn append(&self, session_id: &str, user_text: &str, bot_text: &str) {
        let mut sessions = self.sessions.lock();
        let conversation = sessions.entry(session_id.to_string()).or_default();
        conversation.add_exchange(user_text, bot_text, self.max_turns);
        tracing::debug!(session_id, turns = conversation.len(), "appended exchange");
    }

    fn clear(&self, session_id: &str) -> ClearOutcome {
        match self.sessions.lock().remove(session_id) {
            Some(_) => ClearOutcome::Cleared,
            None => ClearOutcome::NotFound,
        }
    }

    fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }
}

/// Per-session async locks.
///
/// Holding a session's guard across read history → upstream call → append
/// serializes requests that share a session id. Requests for different
/// sessions never wait on each other.
#[derive(Default)]
pub struct SessionLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock();
            if !locks.contains_key(session_id) {
                // Entries only referenced by the map have no holder or waiter.
                locks.retain(|_, l| Arc::strong_count(l) > 1);
            }
            locks
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Number of lock entries currently tracked.
    pub fn tracked(&self) -> usize {
        self.locks.lock().len()
    }
}
