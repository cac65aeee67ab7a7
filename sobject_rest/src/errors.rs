//! Error types for record access.
//!
//! [`Error`] is the whole contract callers branch on: a lookup either found
//! nothing ([`RecordNotFound`]) or the service answered with an explicit
//! error ([`RequestError`]). [`ClientError`] wraps it for the HTTP client and
//! adds the transport-level faults that sit outside that contract.

use serde::{Deserialize, Serialize};

/// Errors reported by the record-access layer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lookup by identifier matched no record.
    #[error(transparent)]
    RecordNotFound(#[from] RecordNotFound),
    /// The service rejected the request with an explicit error response.
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl Error {
    /// Returns `true` if the lookup definitively matched zero records.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound(_))
    }

    /// Returns the service-reported error, if this is one.
    pub fn as_request_error(&self) -> Option<&RequestError> {
        match self {
            Self::Request(e) => Some(e),
            Self::RecordNotFound(_) => None,
        }
    }
}

/// Result alias for record-access operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The identified record could not be located.
#[derive(thiserror::Error, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[error("record not found")]
pub struct RecordNotFound;

/// An error explicitly reported by the remote service.
///
/// Renders as `[<error_code>] <error_message>`. Deserializes from one entry of
/// the service's error payload (`{"errorCode": ..., "message": ...}`).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("[{error_code}] {error_message}")]
pub struct RequestError {
    #[serde(rename = "errorCode")]
    error_code: String,
    #[serde(rename = "message")]
    error_message: String,
}

impl RequestError {
    /// Creates a request error from the service's code and message, verbatim.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: code.into(),
            error_message: message.into(),
        }
    }

    /// The opaque failure code reported by the service.
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// The human-readable description reported by the service.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

/// Errors from the HTTP client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Not-found or an explicit service error.
    #[error(transparent)]
    Rest(#[from] Error),
    /// The API returned a non-success status without a recognizable error payload.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Network error")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// The record-access error carried by this failure, if any.
    pub fn rest(&self) -> Option<&Error> {
        match self {
            Self::Rest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RecordNotFound> for ClientError {
    fn from(e: RecordNotFound) -> Self {
        Self::Rest(e.into())
    }
}

impl From<RequestError> for ClientError {
    fn from(e: RequestError) -> Self {
        Self::Rest(e.into())
    }
}
