//! Error types for the diagnosis workflow

use thiserror::Error;

/// Failures of one analysis attempt, categorized so callers can branch on
/// kind instead of matching display strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The preview held no base64 payload after stripping the data-URI
    /// prefix. Local validation failure, never retried.
    #[error("empty image payload")]
    EmptyPayload,

    /// Predict endpoint answered 404.
    #[error("backend service not found")]
    ServiceNotFound,

    /// Predict endpoint answered 500.
    #[error("internal server error")]
    ServerError,

    /// Any other non-2xx status.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    /// The endpoint could not be reached at all.
    #[error("cannot connect to server")]
    Connection,

    /// A 2xx response whose body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    /// Map a non-2xx HTTP status to its error category.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => AnalysisError::ServiceNotFound,
            500 => AnalysisError::ServerError,
            other => AnalysisError::UnexpectedStatus(other),
        }
    }

    /// Whether another attempt may succeed. Only local validation is
    /// terminal; HTTP, transport and decode failures are all retried.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, AnalysisError::EmptyPayload)
    }

    /// The exact text shown in the result slot after retries are exhausted.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::EmptyPayload => {
                "Analysis failed: No image data to analyze".to_string()
            }
            AnalysisError::ServiceNotFound => {
                "Analysis failed: Backend service not found".to_string()
            }
            AnalysisError::ServerError => {
                "Analysis failed: Internal server error".to_string()
            }
            AnalysisError::UnexpectedStatus(_) | AnalysisError::Malformed(_) => {
                "Analysis failed: Failed to get prediction".to_string()
            }
            AnalysisError::Connection => {
                "Cannot connect to server. Please ensure the backend is running.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_404() {
        assert_eq!(AnalysisError::from_status(404), AnalysisError::ServiceNotFound);
    }

    #[test]
    fn test_from_status_500() {
        assert_eq!(AnalysisError::from_status(500), AnalysisError::ServerError);
    }

    #[test]
    fn test_from_status_other() {
        assert_eq!(
            AnalysisError::from_status(503),
            AnalysisError::UnexpectedStatus(503)
        );
    }

    #[test]
    fn test_empty_payload_not_retryable() {
        assert!(!AnalysisError::EmptyPayload.is_retryable());
        assert!(AnalysisError::ServiceNotFound.is_retryable());
        assert!(AnalysisError::Connection.is_retryable());
        assert!(AnalysisError::Malformed("bad json".to_string()).is_retryable());
    }

    #[test]
    fn test_user_message_404() {
        assert_eq!(
            AnalysisError::ServiceNotFound.user_message(),
            "Analysis failed: Backend service not found"
        );
    }

    #[test]
    fn test_user_message_500() {
        assert_eq!(
            AnalysisError::ServerError.user_message(),
            "Analysis failed: Internal server error"
        );
    }

    #[test]
    fn test_user_message_connection() {
        assert_eq!(
            AnalysisError::Connection.user_message(),
            "Cannot connect to server. Please ensure the backend is running."
        );
    }

    #[test]
    fn test_user_message_generic() {
        assert_eq!(
            AnalysisError::UnexpectedStatus(418).user_message(),
            "Analysis failed: Failed to get prediction"
        );
    }

    #[test]
    fn test_error_display() {
        let display = format!("{}", AnalysisError::UnexpectedStatus(503));
        assert_eq!(display, "unexpected status 503");
    }
}
