//! Application error types for AvoimuusExplorer
//!
//! Provides a unified error model across all operations with:
//! - Stable error codes for frontend handling
//! - User-friendly messages
//! - Optional internal details for logging
//! - Retry hints for UI

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error categories for grouping and UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Input validation errors (bad URLs, invalid arguments)
    Validation,
    /// Network errors (connection, timeout, non-2xx status)
    Network,
    /// Malformed response payloads
    Parse,
    /// File I/O errors (export writes)
    Io,
    /// Internal errors (unexpected state, bugs)
    Internal,
    /// Resource not found
    NotFound,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Network => write!(f, "network"),
            Self::Parse => write!(f, "parse"),
            Self::Io => write!(f, "io"),
            Self::Internal => write!(f, "internal"),
            Self::NotFound => write!(f, "not_found"),
        }
    }
}

/// Stable error codes for frontend handling
/// Format: CATEGORY_SPECIFIC_ERROR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode(pub String);

impl ErrorCode {
    // Validation errors
    pub const VALIDATION_INVALID_URL: &'static str = "VALIDATION_INVALID_URL";
    pub const VALIDATION_INVALID_ARGUMENT: &'static str = "VALIDATION_INVALID_ARGUMENT";

    // Network errors
    pub const NETWORK_CONNECTION_FAILED: &'static str = "NETWORK_CONNECTION_FAILED";
    pub const NETWORK_TIMEOUT: &'static str = "NETWORK_TIMEOUT";
    pub const NETWORK_API_STATUS: &'static str = "NETWORK_API_STATUS";
    pub const NETWORK_HOST_COMMAND_FAILED: &'static str = "NETWORK_HOST_COMMAND_FAILED";

    // Parse errors
    pub const PARSE_INVALID_JSON: &'static str = "PARSE_INVALID_JSON";

    // I/O errors
    pub const IO_WRITE_ERROR: &'static str = "IO_WRITE_ERROR";
    pub const IO_PERMISSION_DENIED: &'static str = "IO_PERMISSION_DENIED";

    // Not found errors
    pub const NOT_FOUND_ACTIVITY: &'static str = "NOT_FOUND_ACTIVITY";

    // Internal errors
    pub const INTERNAL_ERROR: &'static str = "INTERNAL_ERROR";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Application error type for all operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppError {
    /// Stable error code for frontend handling
    pub code: String,
    /// User-friendly error message
    pub message: String,
    /// Optional internal details for logging (not shown to user)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Whether the operation can be retried
    pub retryable: bool,
    /// Error category for grouping
    pub category: ErrorCategory,
}

impl AppError {
    /// Create a new application error
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        category: ErrorCategory,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            detail: None,
            retryable: false,
            category,
        }
    }

    /// Add internal detail for logging
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Mark as retryable
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    // =========================================================================
    // Convenience constructors for common errors
    // =========================================================================

    /// Validation error: invalid URL
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::VALIDATION_INVALID_URL,
            message,
            ErrorCategory::Validation,
        )
    }

    /// Validation error: invalid argument
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::VALIDATION_INVALID_ARGUMENT,
            message,
            ErrorCategory::Validation,
        )
    }

    /// Network error: connection failed
    pub fn connection_failed(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::NETWORK_CONNECTION_FAILED,
            "Connection failed",
            ErrorCategory::Network,
        )
        .with_detail(detail)
        .retryable()
    }

    /// Network error: request timed out
    pub fn timeout() -> Self {
        Self::new(
            ErrorCode::NETWORK_TIMEOUT,
            "Request timed out",
            ErrorCategory::Network,
        )
        .retryable()
    }

    /// Network error: API returned a non-2xx status
    pub fn api_status(status: u16) -> Self {
        Self::new(
            ErrorCode::NETWORK_API_STATUS,
            format!("API error: {}", status),
            ErrorCategory::Network,
        )
        .retryable()
    }

    /// Network error: host-shell command invocation failed
    pub fn host_command(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::NETWORK_HOST_COMMAND_FAILED,
            "Host command failed",
            ErrorCategory::Network,
        )
        .with_detail(detail)
        .retryable()
    }

    /// Parse error: response body was not the expected JSON shape
    pub fn parse_failed(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::PARSE_INVALID_JSON,
            "Failed to parse API response",
            ErrorCategory::Parse,
        )
        .with_detail(detail)
    }

    /// Not found error: activity notification
    pub fn activity_not_found(id: i64) -> Self {
        Self::new(
            ErrorCode::NOT_FOUND_ACTIVITY,
            format!("Activity notification not found: {}", id),
            ErrorCategory::NotFound,
        )
    }

    /// Internal error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::INTERNAL_ERROR,
            "An internal error occurred",
            ErrorCategory::Internal,
        )
        .with_detail(detail)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// Convert from common error types
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::timeout().with_detail(e.to_string())
        } else if e.is_decode() {
            Self::parse_failed(e.to_string())
        } else {
            Self::connection_failed(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse_failed(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::PermissionDenied => Self::new(
                ErrorCode::IO_PERMISSION_DENIED,
                "Permission denied",
                ErrorCategory::Io,
            )
            .with_detail(e.to_string()),
            _ => Self::new(
                ErrorCode::IO_WRITE_ERROR,
                "File write failed",
                ErrorCategory::Io,
            )
            .with_detail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = AppError::api_status(502);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("NETWORK_API_STATUS"));
        assert!(json.contains("network"));
    }

    #[test]
    fn test_error_with_detail() {
        let err = AppError::parse_failed("unexpected end of input");
        assert!(err.detail.is_some());
        assert_eq!(err.detail.unwrap(), "unexpected end of input");
    }

    #[test]
    fn test_error_retryable() {
        let err = AppError::connection_failed("timeout");
        assert!(err.retryable);

        let err = AppError::invalid_url("not a url");
        assert!(!err.retryable);
    }

    #[test]
    fn test_error_display() {
        let err = AppError::activity_not_found(42);
        let display = err.to_string();
        assert!(display.contains("NOT_FOUND_ACTIVITY"));
        assert!(display.contains("42"));
    }
}
