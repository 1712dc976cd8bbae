//! The response envelope returned by every verb method.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::headers::Headers;
use crate::http::Request;

/// Normalized result of a dispatched request.
///
/// The same shape is returned on success and carried inside
/// [`Error::Status`](crate::Error::Status) on HTTP-level failure, so
/// callers inspect `status` and `data` identically on both paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The descriptor that was dispatched, after all transformers ran.
    pub request: Request,
    /// HTTP status code.
    pub status: u16,
    /// Response headers, case-insensitive.
    pub headers: Headers,
    /// Final URL as reported by the transport.
    pub url: String,
    /// Parsed JSON body; an empty object when the body was empty.
    pub data: Value,
}

impl Response {
    /// Deserialize `data` into a caller type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone())
    }
}
