use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, MutexGuard};

use super::Turn;

/// A single conversational context keyed by a caller-supplied id. The
/// transcript sits behind its own mutex so concurrent chat calls against
/// the same session serialize their appends.
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    transcript: Mutex<Vec<Turn>>,
}

impl Session {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            created_at: Utc::now(),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Exclusive access to the turn list. Callers hold the guard across a
    /// full generation round so a user/assistant pair lands adjacently.
    pub async fn transcript_mut(&self) -> MutexGuard<'_, Vec<Turn>> {
        self.transcript.lock().await
    }

    /// Snapshot of the transcript at the time of the call.
    pub async fn transcript(&self) -> Vec<Turn> {
        self.transcript.lock().await.clone()
    }

    pub async fn turn_count(&self) -> usize {
        self.transcript.lock().await.len()
    }
}

/// Process-lifetime session map. Sessions are created implicitly on first
/// reference and never evicted.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&self, id: &str) -> Arc<Session> {
        let mut sessions = self
            .sessions
            .write()
            .expect("Unable to write session store");
        Arc::clone(
            sessions
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(Session::new(id))),
        )
    }

    pub fn get(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions
            .read()
            .expect("Unable to read session store")
            .get(id)
            .cloned()
    }

    /// All sessions, newest first.
    pub fn list(&self) -> Vec<Arc<Session>> {
        let mut sessions = self
            .sessions
            .read()
            .expect("Unable to read session store")
            .values()
            .cloned()
            .collect::<Vec<_>>();
        sessions.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        sessions
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .expect("Unable to read session store")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
