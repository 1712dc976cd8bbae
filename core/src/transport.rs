//! The transport seam: the client's sole I/O dependency.
//!
//! # Design
//! The client never opens a connection itself. Whatever can turn a
//! [`Request`] into a [`RawResponse`] satisfies the seam: a reqwest
//! wrapper, an in-memory test double, a recording proxy. The trait is
//! object-safe so transports can also be boxed if a caller prefers.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::headers::Headers;
use crate::http::Request;

/// A raw response produced by a [`Transport`], described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Headers,
    /// Final URL as seen by the transport (after any redirects it follows).
    pub url: String,
    /// Body text; empty when the response had no body.
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for pluggable transports.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` against `url` and return the raw response.
    ///
    /// `url` always equals `request.url` after the transformer pipeline has
    /// run; it is passed separately to keep the fetch-style `(url, request)`
    /// calling shape.
    async fn fetch(&self, url: &str, request: &Request) -> Result<RawResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16) -> RawResponse {
        RawResponse {
            status,
            headers: Headers::new(),
            url: "http://api.test/".to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn two_hundreds_are_success() {
        assert!(raw(200).is_success());
        assert!(raw(204).is_success());
        assert!(raw(299).is_success());
    }

    #[test]
    fn everything_else_is_failure() {
        assert!(!raw(199).is_success());
        assert!(!raw(301).is_success());
        assert!(!raw(404).is_success());
        assert!(!raw(500).is_success());
    }
}
