//! Error types for authenticated dispatch.
//!
//! This module defines the full failure taxonomy of an authenticated call:
//! missing or expired local session, server-side rejection, and transport
//! faults. No error here is fatal; every failure path returns control to
//! the caller for retry or user notification.

use thiserror::Error;

/// Dispatch errors.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No active session or no token held.
    #[error("authentication required: no active session")]
    NotAuthenticated,

    /// Session is past its TTL. The dispatcher has already logged it out.
    #[error("session expired: please authenticate again")]
    SessionExpired,

    /// Server answered HTTP 401. The dispatcher has already logged the
    /// session out.
    #[error("server rejected the credentials")]
    Unauthorized,

    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-401 error response.
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Error message from the API, verbatim where the server supplies one.
        message: String,
    },

    /// Response body could not be parsed.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Coarse failure classification, independent of transport detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No active session.
    NotAuthenticated,
    /// Session present but past its TTL.
    Expired,
    /// Server rejected the credential.
    Unauthorized,
    /// Network or non-401 HTTP failure.
    Transport,
}

impl DispatchError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::NotAuthenticated => ErrorKind::NotAuthenticated,
            DispatchError::SessionExpired => ErrorKind::Expired,
            DispatchError::Unauthorized => ErrorKind::Unauthorized,
            DispatchError::RequestFailed(_)
            | DispatchError::ApiError { .. }
            | DispatchError::InvalidResponse(_) => ErrorKind::Transport,
        }
    }

    /// Whether the dispatcher invalidated the session before returning
    /// this error.
    pub fn invalidates_session(&self) -> bool {
        matches!(
            self,
            DispatchError::SessionExpired | DispatchError::Unauthorized
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            DispatchError::NotAuthenticated.kind(),
            ErrorKind::NotAuthenticated
        );
        assert_eq!(DispatchError::SessionExpired.kind(), ErrorKind::Expired);
        assert_eq!(DispatchError::Unauthorized.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            DispatchError::ApiError {
                status: 500,
                message: "boom".to_string(),
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            DispatchError::InvalidResponse("bad json".to_string()).kind(),
            ErrorKind::Transport
        );
    }

    #[test]
    fn test_session_invalidation_flags() {
        assert!(DispatchError::SessionExpired.invalidates_session());
        assert!(DispatchError::Unauthorized.invalidates_session());
        assert!(!DispatchError::NotAuthenticated.invalidates_session());
        assert!(!DispatchError::InvalidResponse("x".to_string()).invalidates_session());
    }

    #[test]
    fn test_api_error_message_is_surfaced() {
        let err = DispatchError::ApiError {
            status: 400,
            message: "note repository not configured".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (400): note repository not configured"
        );
    }
}
