//! Session data models.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::installer::WizardState;

/// Opaque browser session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Accept an id from a client cookie. Anything that isn't a UUID is
    /// rejected so arbitrary cookie values never reach the store.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim())
            .ok()
            .map(|uuid| Self(uuid.simple().to_string()))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything stored for one browser session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Wizard state per installation fingerprint.
    #[serde(default)]
    pub installation: HashMap<String, WizardState>,
    /// Last time the session was saved.
    pub last_seen: DateTime<Utc>,
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            installation: HashMap::new(),
            last_seen: Utc::now(),
        }
    }
}

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, fingerprint: &str) -> Option<&WizardState> {
        self.installation.get(fingerprint)
    }

    pub fn put(&mut self, fingerprint: impl Into<String>, state: WizardState) {
        self.installation.insert(fingerprint.into(), state);
    }

    pub fn remove(&mut self, fingerprint: &str) -> Option<WizardState> {
        self.installation.remove(fingerprint)
    }

    /// Whether an installer has stored anything in this session.
    pub fn has_installer_data(&self) -> bool {
        !self.installation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_parse() {
        let id = SessionId::generate();
        assert_eq!(SessionId::parse(&id.to_string()), Some(id.clone()));
        assert_eq!(SessionId::parse(&format!(" {id} ")), Some(id));
        assert_eq!(SessionId::parse("not-a-session"), None);
        assert_eq!(SessionId::parse(""), None);
    }

    #[test]
    fn test_session_data_keyed_by_fingerprint() {
        let mut data = SessionData::new();
        assert!(!data.has_installer_data());

        data.put("fp-a", WizardState::with_filled([0]));
        assert!(data.has_installer_data());
        assert_eq!(data.get("fp-a"), Some(&WizardState::with_filled([0])));
        assert_eq!(data.get("fp-b"), None);

        assert!(data.remove("fp-a").is_some());
        assert!(!data.has_installer_data());
    }
}
