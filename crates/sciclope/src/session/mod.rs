//! Installer session storage.
//!
//! Browser sessions are identified by a cookie. Each session holds the
//! wizard state of every installation the browser has touched, keyed by
//! installation fingerprint.

mod error;
mod memory;
mod models;
mod traits;

pub use error::{SessionError, SessionResult};
pub use memory::MemorySessionStore;
pub use models::{SessionData, SessionId};
pub use traits::SessionStore;

/// Cookie carrying the installer session id.
pub const SESSION_COOKIE: &str = "sciclope_installer";
