//! Error types for the client.
//!
//! # Design
//! `Status` carries the full response envelope because callers branch on
//! `status` and `data` (validation errors, auth failures). A transport
//! failure keeps the transport's own error untouched; no envelope is
//! fabricated when no response was ever received.

use thiserror::Error;

use crate::response::Response;

/// Errors returned by every verb method.
#[derive(Debug, Error)]
pub enum Error {
    /// A response was received with a non-2xx status. Carries the fully
    /// populated envelope, including the dispatched request and parsed body.
    #[error("HTTP {} from {}", .0.status, .0.url)]
    Status(Response),

    /// The transport itself failed before any response was received.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The response body was non-empty but not valid JSON.
    #[error("malformed response body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("payload serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    /// The envelope carried by an HTTP-level failure, if any.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Status(response) => Some(response),
            _ => None,
        }
    }

    /// Status code of an HTTP-level failure, if any.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.status)
    }
}

/// Failure raised by a transport implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request exceeded the transport's own deadline.
    #[error("request timed out")]
    Timeout,

    /// The remote endpoint could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}
