//! Session error types.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur in the session layer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session could be started.
    #[error("session unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::Unavailable("store full".to_string());
        assert_eq!(err.to_string(), "session unavailable: store full");
    }
}
