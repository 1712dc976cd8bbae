//! Minimal HTTP client wrapper over an injected fetch-style transport.
//!
//! # Overview
//! [`FetchClient`] prefixes a base URL, serializes JSON payloads, treats
//! non-2xx responses as errors, and runs every outgoing request through an
//! ordered pipeline of async transformers. Failures are fanned out to
//! registered error listeners before being returned to the caller.
//!
//! # Design
//! - The network lives behind the [`Transport`] trait, the crate's sole
//!   I/O seam. The core never opens a connection itself; integration tests
//!   plug in a real backend, unit tests an in-memory double.
//! - The client holds only immutable configuration. Every call builds its
//!   own request descriptor and response envelope, so concurrent calls on
//!   one client do not interfere.
//! - Headers are one case-insensitive map everywhere; no backend header
//!   type leaks through the API.
//! - No retries, caching, pooling, or timeouts: a single failed attempt is
//!   a single error, and deadlines belong to the transport.

pub mod client;
pub mod error;
pub mod headers;
pub mod http;
pub mod listener;
pub mod response;
pub mod transform;
pub mod transport;

pub use client::{ClientBuilder, FetchClient};
pub use error::{Error, TransportError};
pub use headers::Headers;
pub use http::{Method, Request, RequestConfig};
pub use listener::ErrorListener;
pub use response::Response;
pub use transform::{BearerAuth, Transformer};
pub use transport::{RawResponse, Transport};
