//! Error listeners: side-effect observers notified on every failed call.

use crate::error::Error;

/// Observes rejected calls for cross-cutting concerns such as centralized
/// logging or a session-expiry redirect.
///
/// Listeners never alter the outcome; the caller receives the original
/// error unchanged after all listeners have run. They are invoked for
/// HTTP-level, transport-level, serialization, and body-parse failures
/// alike.
pub trait ErrorListener: Send + Sync {
    fn on_error(&self, error: &Error);
}

impl<F> ErrorListener for F
where
    F: Fn(&Error) + Send + Sync,
{
    fn on_error(&self, error: &Error) {
        self(error)
    }
}
