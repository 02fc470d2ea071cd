//! Verification Error Types
//!
//! A single error family for the session gate: every way an identity check
//! can fail. These never reach the navigation guard; the session store
//! absorbs them into the unauthenticated verdict.

use std::time::Duration;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::api_client::TransportError;
use thiserror::Error;

/// Verification result type alias
pub type VerificationResult<T> = Result<T, VerificationError>;

/// Reasons an identity check failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// The API rejected the session (401/403)
    #[error("Session is not authenticated")]
    Unauthorized,

    /// The API could not be reached
    #[error("Identity endpoint unreachable: {0}")]
    Transport(String),

    /// The API answered with a status other than success or rejection
    #[error("Identity endpoint returned status {0}")]
    UnexpectedStatus(u16),

    /// The API answered 2xx with a body that is not an identity
    #[error("Invalid identity payload: {0}")]
    InvalidPayload(String),

    /// No answer within the configured bound
    #[error("Identity check timed out after {0:?}")]
    TimedOut(Duration),
}

impl VerificationError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerificationError::Unauthorized => ErrorKind::Unauthorized,
            VerificationError::Transport(_) => ErrorKind::ServiceUnavailable,
            VerificationError::UnexpectedStatus(code) => {
                ErrorKind::from_status(*code).unwrap_or(ErrorKind::BadGateway)
            }
            VerificationError::InvalidPayload(_) => ErrorKind::BadGateway,
            VerificationError::TimedOut(_) => ErrorKind::GatewayTimeout,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            VerificationError::Unauthorized => err.with_action("Sign in to continue"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            VerificationError::Unauthorized => {
                tracing::debug!("Identity check: no authenticated session");
            }
            VerificationError::InvalidPayload(detail) => {
                tracing::error!(detail = %detail, "Identity endpoint returned an invalid payload");
            }
            _ => {
                tracing::warn!(error = %self.to_app_error(), "Identity check failed");
            }
        }
    }
}

impl From<TransportError> for VerificationError {
    fn from(err: TransportError) -> Self {
        match err {
            e if e.is_auth_rejection() => VerificationError::Unauthorized,
            TransportError::Status(status) => VerificationError::UnexpectedStatus(status.as_u16()),
            TransportError::Decode(e) => VerificationError::InvalidPayload(e.to_string()),
            e => VerificationError::Transport(e.to_string()),
        }
    }
}
