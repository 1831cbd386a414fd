//! Challenge Error Types
//!
//! This module provides challenge-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Evaluating a submission never fails. These errors cover the page
//! plumbing around it: unknown paths, oversized bodies, bad configuration,
//! and template rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Challenge-specific result type alias
pub type ChallengeResult<T> = Result<T, ChallengeError>;

/// Challenge-specific error variants
#[derive(Debug, Error)]
pub enum ChallengeError {
    /// Request for a path that is not the challenge page
    #[error("No page at {0}")]
    PageNotFound(String),

    /// Form body exceeded the configured limit
    #[error("Form submission is too large")]
    PayloadTooLarge,

    /// Configuration value could not be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    /// Page template failed to render
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl ChallengeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChallengeError::PageNotFound(_) => StatusCode::NOT_FOUND,
            ChallengeError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ChallengeError::InvalidConfig { .. } | ChallengeError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChallengeError::PageNotFound(_) => ErrorKind::NotFound,
            ChallengeError::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            ChallengeError::InvalidConfig { .. } | ChallengeError::Render(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        const BACK_TO_LOGIN: &str = "Go back to the login page at /";
        match self {
            ChallengeError::PageNotFound(_) => {
                AppError::not_found(self.to_string()).with_action(BACK_TO_LOGIN)
            }
            ChallengeError::PayloadTooLarge => {
                AppError::payload_too_large(self.to_string()).with_action(BACK_TO_LOGIN)
            }
            ChallengeError::InvalidConfig { .. } | ChallengeError::Render(_) => {
                AppError::new(self.kind(), self.to_string())
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ChallengeError::InvalidConfig { key, .. } => {
                tracing::error!(key = key, "Invalid challenge configuration");
            }
            ChallengeError::Render(e) => {
                tracing::error!(error = %e, "Challenge page rendering failed");
            }
            ChallengeError::PayloadTooLarge => {
                tracing::warn!("Rejected oversized form submission");
            }
            ChallengeError::PageNotFound(path) => {
                tracing::debug!(path = %path, "Unknown page requested");
            }
        }
    }
}

impl IntoResponse for ChallengeError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_matches_kind() {
        let errors = [
            ChallengeError::PageNotFound("/admin".to_string()),
            ChallengeError::PayloadTooLarge,
            ChallengeError::InvalidConfig {
                key: "MAX_FORM_BYTES",
                value: "x".to_string(),
            },
            ChallengeError::Render(askama::Error::Fmt),
        ];
        for err in errors {
            assert_eq!(err.status_code().as_u16(), err.kind().status_code());
        }
    }

    #[test]
    fn test_not_found_message_includes_path() {
        let app_err = ChallengeError::PageNotFound("/admin".to_string()).to_app_error();
        assert_eq!(app_err.message(), "No page at /admin");
        assert!(app_err.action().is_some());
    }

    #[test]
    fn test_render_failure_is_internal() {
        let app_err = ChallengeError::Render(askama::Error::Fmt).to_app_error();
        assert_eq!(app_err.status_code(), 500);
        assert!(app_err.action().is_none());
    }

    #[test]
    fn test_into_response() {
        let response = ChallengeError::PayloadTooLarge.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
