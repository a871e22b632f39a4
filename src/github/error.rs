// ABOUTME: Error types for hosting platform API calls.
// ABOUTME: Separates transport failures, HTTP error codes, and optimistic-lock conflicts.

use thiserror::Error;

/// Errors from a single platform API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The platform answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A file write was rejected because its version token is stale.
    #[error("version conflict: {0}")]
    Conflict(String),

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the platform returned one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Conflict(_) => Some(409),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_formats_code_and_message() {
        let err = ApiError::Status {
            status: 403,
            message: "Resource not accessible by integration".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 403: Resource not accessible by integration"
        );
        assert_eq!(err.status(), Some(403));
        assert!(!err.is_conflict());
    }

    #[test]
    fn conflict_reports_409() {
        let err = ApiError::Conflict("sha does not match".to_string());
        assert!(err.is_conflict());
        assert_eq!(err.status(), Some(409));
    }
}
