//! Request transformers: the ordered rewrite pipeline run before dispatch.

use async_trait::async_trait;

use crate::http::Request;

/// Rewrites an outgoing request descriptor before dispatch.
///
/// Transformers run strictly in registration order; each consumes the
/// previous stage's output by value and returns the next descriptor. A
/// transformer may await external resources (a token refresh, a signing
/// service) before returning, which suspends that one call, not the
/// client.
#[async_trait]
pub trait Transformer: Send + Sync {
    async fn transform(&self, request: Request) -> Request;
}

/// Injects `Authorization: Bearer <token>` into every request.
///
/// The token source runs once per request, so rotated credentials are
/// picked up without rebuilding the client.
pub struct BearerAuth<F> {
    token_source: F,
}

impl<F> BearerAuth<F>
where
    F: Fn() -> String + Send + Sync,
{
    pub fn new(token_source: F) -> Self {
        Self { token_source }
    }
}

#[async_trait]
impl<F> Transformer for BearerAuth<F>
where
    F: Fn() -> String + Send + Sync,
{
    async fn transform(&self, mut request: Request) -> Request {
        let token = (self.token_source)();
        request
            .headers
            .insert("authorization", format!("Bearer {token}"));
        request
    }
}
