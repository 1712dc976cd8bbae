//! The client: verb methods, request assembly, and the dispatch pipeline.
//!
//! # Design
//! `FetchClient` holds only immutable configuration: base URL, transport,
//! transformer list, listener list. Every verb call builds its own
//! `Request` and `Response`, so concurrent calls on one client never
//! interfere. The transport is always injected; there is no process-wide
//! default to fall back on.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::http::{Method, Request, RequestConfig};
use crate::listener::ErrorListener;
use crate::response::Response;
use crate::transform::Transformer;
use crate::transport::Transport;

/// Marker for the bodyless verbs.
const NO_PAYLOAD: Option<&Value> = None;

/// Minimal HTTP client over an injected transport.
///
/// Base-URL prefixing, JSON payload serialization, non-2xx-as-error
/// semantics, an ordered async transformer pipeline, and error-listener
/// fan-out. See the crate docs for the full contract.
pub struct FetchClient<T> {
    base_url: String,
    transport: T,
    transformers: Vec<Arc<dyn Transformer>>,
    listeners: Vec<Arc<dyn ErrorListener>>,
}

impl<T: Transport> FetchClient<T> {
    /// Client with empty transformer and listener pipelines.
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            transformers: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Builder for attaching transformers and error listeners.
    pub fn builder(base_url: impl Into<String>, transport: T) -> ClientBuilder<T> {
        ClientBuilder {
            client: Self::new(base_url, transport),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The injected transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Registered transformers, in execution order.
    pub fn transformers(&self) -> &[Arc<dyn Transformer>] {
        &self.transformers
    }

    /// Registered error listeners, in notification order.
    pub fn error_listeners(&self) -> &[Arc<dyn ErrorListener>] {
        &self.listeners
    }

    pub async fn get(&self, path: &str, config: RequestConfig) -> Result<Response, Error> {
        self.request(Method::Get, path, NO_PAYLOAD, config).await
    }

    pub async fn delete(&self, path: &str, config: RequestConfig) -> Result<Response, Error> {
        self.request(Method::Delete, path, NO_PAYLOAD, config).await
    }

    pub async fn post<P>(
        &self,
        path: &str,
        payload: Option<&P>,
        config: RequestConfig,
    ) -> Result<Response, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::Post, path, payload, config).await
    }

    pub async fn put<P>(
        &self,
        path: &str,
        payload: Option<&P>,
        config: RequestConfig,
    ) -> Result<Response, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::Put, path, payload, config).await
    }

    pub async fn patch<P>(
        &self,
        path: &str,
        payload: Option<&P>,
        config: RequestConfig,
    ) -> Result<Response, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::Patch, path, payload, config).await
    }

    /// Shared verb implementation: send, then fan any failure out to the
    /// listeners before returning it unchanged.
    async fn request<P>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
        config: RequestConfig,
    ) -> Result<Response, Error>
    where
        P: Serialize + ?Sized,
    {
        match self.send_request(method, path, payload, config).await {
            Ok(response) => Ok(response),
            Err(error) => {
                self.notify_listeners(&error);
                Err(error)
            }
        }
    }

    /// Build the descriptor, run the transformer pipeline, dispatch, and
    /// normalize the raw response into an envelope.
    async fn send_request<P>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
        config: RequestConfig,
    ) -> Result<Response, Error>
    where
        P: Serialize + ?Sized,
    {
        // Plain concatenation: slash placement is the caller's problem.
        let url = format!("{}{}", self.base_url, path);
        let mut request = Request {
            method,
            url,
            headers: config.headers,
            body: None,
        };

        // An explicit config body wins over the payload and is sent
        // verbatim, caller-supplied headers included.
        if let Some(body) = config.body {
            request.body = Some(body);
        } else if let Some(payload) = payload {
            request.body = Some(serde_json::to_string(payload).map_err(Error::Serialize)?);
            request.headers.insert("content-type", "application/json");
        }

        // Sequential fold: transformer i+1 sees transformer i's output, and
        // an async transformer finishes before the next one starts.
        for transformer in &self.transformers {
            request = transformer.transform(request).await;
        }

        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        let raw = self
            .transport
            .fetch(&request.url, &request)
            .await
            .map_err(Error::Transport)?;

        tracing::debug!(status = raw.status, url = %raw.url, "response received");

        let data = if raw.body.is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_str(&raw.body).map_err(Error::MalformedBody)?
        };

        let success = raw.is_success();
        let response = Response {
            request,
            status: raw.status,
            headers: raw.headers,
            url: raw.url,
            data,
        };

        if success {
            Ok(response)
        } else {
            Err(Error::Status(response))
        }
    }

    /// Invoke every listener in order. A panicking listener is logged and
    /// skipped so it can neither starve later listeners nor mask the error.
    fn notify_listeners(&self, error: &Error) {
        for listener in &self.listeners {
            if catch_unwind(AssertUnwindSafe(|| listener.on_error(error))).is_err() {
                tracing::warn!(error = %error, "error listener panicked");
            }
        }
    }
}

impl<T> fmt::Debug for FetchClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("transformers", &self.transformers.len())
            .field("error_listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Builder returned by [`FetchClient::builder`].
pub struct ClientBuilder<T> {
    client: FetchClient<T>,
}

impl<T: Transport> ClientBuilder<T> {
    /// Append a transformer to the end of the pipeline.
    pub fn transformer(mut self, transformer: impl Transformer + 'static) -> Self {
        self.client.transformers.push(Arc::new(transformer));
        self
    }

    /// Append an error listener to the end of the notification list.
    pub fn error_listener(mut self, listener: impl ErrorListener + 'static) -> Self {
        self.client.listeners.push(Arc::new(listener));
        self
    }

    pub fn build(self) -> FetchClient<T> {
        self.client
    }
}
