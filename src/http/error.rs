//! HTTP client error types

use thiserror::Error;

/// Errors surfaced by the HTTP client and every service built on it
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, CORS...)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The request body could not be serialized
    #[error("Request build error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status of a rejected response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
