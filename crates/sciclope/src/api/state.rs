//! Application state shared across handlers.

use std::sync::Arc;

use crate::installer::WizardController;
use crate::session::SessionStore;
use crate::startup::Site;

/// Application state, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
    pub wizard: Arc<WizardController>,
    pub sessions: Arc<dyn SessionStore>,
    /// Session cookie lifetime in seconds.
    pub session_max_age: i64,
}

impl AppState {
    pub fn new(
        site: Site,
        wizard: WizardController,
        sessions: Arc<dyn SessionStore>,
        session_max_age: i64,
    ) -> Self {
        Self {
            site: Arc::new(site),
            wizard: Arc::new(wizard),
            sessions,
            session_max_age,
        }
    }
}
