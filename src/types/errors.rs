//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the Airflow MCP server.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid tool arguments (map to MCP `invalid_params`).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown tool or resource (map to MCP `invalid_params`).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid startup configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal errors (map to MCP `internal_error`).
    #[error("internal error: {0}")]
    Internal(String),

    /// MCP transport failed to start or terminated abnormally.
    #[error("transport error: {0}")]
    Transport(String),

    /// Airflow answered with a non-success status.
    #[error("airflow returned {status}: {message}")]
    Airflow { status: u16, message: String },

    /// HTTP client errors (connection refused, timeouts, TLS).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the failure was caused by the caller's input rather than by
    /// the server or Airflow.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn airflow(status: u16, message: impl Into<String>) -> Self {
        Self::Airflow {
            status,
            message: message.into(),
        }
    }
}

// Enables `?` on crate errors inside rmcp handlers
impl From<Error> for rmcp::ErrorData {
    fn from(err: Error) -> Self {
        if err.is_client_error() {
            rmcp::ErrorData::invalid_params(err.to_string(), None)
        } else {
            rmcp::ErrorData::internal_error(err.to_string(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(Error::validation("bad").is_client_error());
        assert!(Error::not_found("missing").is_client_error());
        assert!(!Error::internal("boom").is_client_error());
        assert!(!Error::airflow(500, "down").is_client_error());
    }

    #[test]
    fn test_airflow_error_message() {
        let err = Error::airflow(404, "DAG not found");
        assert_eq!(err.to_string(), "airflow returned 404: DAG not found");
    }

    #[test]
    fn test_into_mcp_error_code() {
        let invalid: rmcp::ErrorData = Error::validation("limit must be an integer").into();
        assert_eq!(invalid.code, rmcp::model::ErrorCode::INVALID_PARAMS);

        let internal: rmcp::ErrorData = Error::internal("boom").into();
        assert_eq!(internal.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
    }
}
