//! Request-side types shared by the client and the transport seam.
//!
//! # Design
//! Requests are plain data. The client builds a [`Request`] per call and
//! hands it to an injected transport; nothing here touches the network.
//! All fields are owned so descriptors can move freely through the async
//! transformer pipeline.

use std::fmt;

use crate::headers::Headers;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Upper-case wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing HTTP request described as plain data.
///
/// Built fresh for every verb call, then folded through the registered
/// transformers before dispatch. Each transformer consumes the previous
/// descriptor by value and returns the next one, so no stage sees a
/// descriptor another stage still holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Absolute URL: the client's base URL concatenated with the call path.
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

/// Per-call overrides accepted by every verb method.
///
/// `headers` seeds the descriptor's header map. An explicit `body` is sent
/// verbatim and suppresses payload serialization entirely, the escape
/// hatch for form-encoded or otherwise pre-encoded payloads, where the
/// caller supplies the matching headers too.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub headers: Headers,
    pub body: Option<String>,
}

impl RequestConfig {
    /// No extra headers, no body override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header to the initial descriptor.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Send `body` verbatim instead of serializing a payload.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
