//! Session store trait.

use async_trait::async_trait;

use super::{SessionData, SessionId, SessionResult};

/// Persistence for installer sessions.
///
/// Concurrent writes to the same session are last-write-wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Start a new, empty session.
    ///
    /// Fails with [`SessionError::Unavailable`](super::SessionError::Unavailable)
    /// when the store cannot take another session.
    async fn start(&self) -> SessionResult<SessionId>;

    /// Load a session. Returns `None` for unknown or expired sessions.
    async fn load(&self, id: &SessionId) -> SessionResult<Option<SessionData>>;

    /// Save a session, refreshing its expiry.
    async fn save(&self, id: &SessionId, data: SessionData) -> SessionResult<()>;

    /// Drop a session.
    async fn remove(&self, id: &SessionId) -> SessionResult<()>;
}
