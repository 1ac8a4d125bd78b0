use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Installer progress for one installation, persisted in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    /// Indices of pages whose data has been accepted.
    #[serde(default)]
    pub filled_pages: BTreeSet<usize>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state with the given pages already filled.
    pub fn with_filled(pages: impl IntoIterator<Item = usize>) -> Self {
        Self {
            filled_pages: pages.into_iter().collect(),
        }
    }

    /// The highest page index the visitor may currently open.
    ///
    /// This is one past the highest filled page, or `0` when nothing has been
    /// filled yet. Saturates for states carrying absurd indices.
    pub fn first_remaining(&self) -> usize {
        self.filled_pages
            .last()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Record a page as filled. Returns false if it already was.
    pub fn mark_filled(&mut self, index: usize) -> bool {
        self.filled_pages.insert(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_remaining_empty() {
        assert_eq!(WizardState::new().first_remaining(), 0);
    }

    #[test]
    fn test_first_remaining_uses_max() {
        assert_eq!(WizardState::with_filled([0]).first_remaining(), 1);
        assert_eq!(WizardState::with_filled([0, 1, 2]).first_remaining(), 3);
        // Gaps don't matter, only the highest filled page.
        assert_eq!(WizardState::with_filled([4, 1]).first_remaining(), 5);
    }

    #[test]
    fn test_first_remaining_saturates() {
        let state: WizardState =
            serde_json::from_value(serde_json::json!({ "filled_pages": [usize::MAX] })).unwrap();
        assert_eq!(state.first_remaining(), usize::MAX);
    }

    #[test]
    fn test_mark_filled() {
        let mut state = WizardState::new();
        assert!(state.mark_filled(0));
        assert!(!state.mark_filled(0));
        assert_eq!(state, WizardState::with_filled([0]));
    }

    #[test]
    fn test_serde_shape() {
        let state = WizardState::with_filled([1, 0]);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({ "filled_pages": [0, 1] }));

        let restored: WizardState = serde_json::from_str("{}").unwrap();
        assert_eq!(restored, WizardState::default());
    }
}
