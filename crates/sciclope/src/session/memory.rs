//! In-process session store.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{SessionData, SessionError, SessionId, SessionResult, SessionStore};

/// Session store backed by a concurrent map.
///
/// Sessions expire after `ttl` without a save. At most `max_sessions` live
/// sessions are kept; starting one more fails instead of evicting.
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: DashMap<SessionId, SessionData>,
    ttl: Duration,
    max_sessions: usize,
    /// Held while a new key is added, so the capacity check and the insert
    /// happen as one step.
    admission: Mutex<()>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
            max_sessions,
            admission: Mutex::new(()),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop expired sessions. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let cutoff = Utc::now() - self.ttl;
        let before = self.sessions.len();
        self.sessions.retain(|_, data| data.last_seen > cutoff);
        let purged = before.saturating_sub(self.sessions.len());
        if purged > 0 {
            debug!(purged, "purged expired installer sessions");
        }
        purged
    }

    fn is_expired(&self, data: &SessionData) -> bool {
        data.last_seen + self.ttl <= Utc::now()
    }

    /// Add a session that is not in the map yet, respecting the limit.
    async fn admit(&self, id: &SessionId, data: SessionData) -> SessionResult<()> {
        let _admission = self.admission.lock().await;

        if self.sessions.len() >= self.max_sessions {
            self.purge_expired();
        }
        if self.sessions.len() >= self.max_sessions {
            warn!(
                max_sessions = self.max_sessions,
                "installer session store is full"
            );
            return Err(SessionError::Unavailable(format!(
                "session limit of {} reached",
                self.max_sessions
            )));
        }

        self.sessions.insert(id.clone(), data);
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn start(&self) -> SessionResult<SessionId> {
        let id = SessionId::generate();
        self.admit(&id, SessionData::new()).await?;
        debug!(session = %id, "started installer session");
        Ok(id)
    }

    async fn load(&self, id: &SessionId) -> SessionResult<Option<SessionData>> {
        let data = match self.sessions.get(id) {
            Some(entry) => entry.value().clone(),
            None => return Ok(None),
        };

        if self.is_expired(&data) {
            self.sessions.remove(id);
            debug!(session = %id, "installer session expired");
            return Ok(None);
        }

        Ok(Some(data))
    }

    async fn save(&self, id: &SessionId, mut data: SessionData) -> SessionResult<()> {
        data.last_seen = Utc::now();
        if let Some(mut entry) = self.sessions.get_mut(id) {
            *entry = data;
            return Ok(());
        }

        // The session expired or was removed since it was loaded.
        self.admit(id, data).await
    }

    async fn remove(&self, id: &SessionId) -> SessionResult<()> {
        self.sessions.remove(id);
        Ok(())
    }
}
