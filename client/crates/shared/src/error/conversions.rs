//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::bad_request("Invalid environment variable").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            // 上流サーバーが不正な JSON を返した
            AppError::new(ErrorKind::BadGateway, format!("JSON parse error: {}", err))
                .with_source(err)
        } else {
            AppError::internal("JSON deserialization error").with_source(err)
        }
    }
}

// ============================================================================
// HTTP conversions (feature-gated)
// ============================================================================

#[cfg(feature = "http")]
impl From<http::StatusCode> for ErrorKind {
    fn from(status: http::StatusCode) -> Self {
        ErrorKind::from_status(status.as_u16()).unwrap_or(ErrorKind::BadGateway)
    }
}
