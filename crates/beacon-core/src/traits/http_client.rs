//! HTTP capability consumed by the transports.
//!
//! Anything that can POST a body and later release its connection can
//! carry hits: the bundled reqwest clients, a proxy, or a test double.

use crate::errors::TransportError;

/// One outgoing POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub url: String,
    pub user_agent: String,
    /// `application/x-www-form-urlencoded` body, hits joined by `\n`.
    pub body: String,
}

/// Blocking HTTP capability.
pub trait HttpClient {
    /// POST the request, returning once the response has arrived.
    fn post(&mut self, request: &PostRequest) -> Result<(), TransportError>;

    /// Release the underlying connection resources.
    fn close(&mut self) -> Result<(), TransportError>;
}

/// Suspending HTTP capability, driven by the caller's executor.
#[allow(async_fn_in_trait)]
pub trait AsyncHttpClient {
    /// POST the request; resolves once the response has arrived.
    async fn post(&mut self, request: &PostRequest) -> Result<(), TransportError>;

    /// Release the underlying connection resources.
    async fn close(&mut self) -> Result<(), TransportError>;
}
