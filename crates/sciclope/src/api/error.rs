//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::session::SessionError;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The installer session could not be started. Answered with an empty
    /// body so no partial page reaches the client.
    #[error("Session unavailable: {0}")]
    SessionUnavailable(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::SessionUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SessionUnavailable(_) => "SESSION_UNAVAILABLE",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        match &self {
            ApiError::SessionUnavailable(msg) => {
                warn!(error_code = code, message = %msg, "Installer session unavailable");
            }
        }

        status.into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Unavailable(msg) => Self::SessionUnavailable(msg),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status_codes() {
        let err = ApiError::SessionUnavailable(String::new());
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), "SESSION_UNAVAILABLE");
    }

    #[test]
    fn test_session_error_mapping() {
        let err: ApiError = SessionError::Unavailable("full".to_string()).into();
        assert!(matches!(err, ApiError::SessionUnavailable(_)));
    }

    #[tokio::test]
    async fn test_session_unavailable_has_empty_body() {
        let response = ApiError::SessionUnavailable("full".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert!(body.is_empty());
    }
}
