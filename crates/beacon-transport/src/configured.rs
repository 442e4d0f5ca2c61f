//! Blocking transport chosen by `transport.batch` in config.

use beacon_core::config::TransportConfig;
use beacon_core::errors::TransportError;
use beacon_core::traits::HttpClient;
use beacon_core::Payload;

use crate::request::{HttpBatchRequest, HttpRequest};
use crate::transport::Transport;

/// Either a single-hit or a batching transport, selected at runtime.
#[derive(Debug)]
pub enum HttpTransport<C: HttpClient> {
    Single(HttpRequest<C>),
    Batch(HttpBatchRequest<C>),
}

impl<C: HttpClient> HttpTransport<C> {
    pub fn with_client(client: C, config: &TransportConfig) -> Self {
        if config.effective_batch() {
            Self::Batch(HttpBatchRequest::with_client(client, config))
        } else {
            Self::Single(HttpRequest::with_client(client, config))
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::Single(inner) => inner.endpoint(),
            Self::Batch(inner) => inner.endpoint(),
        }
    }
}

impl<C: HttpClient> Transport for HttpTransport<C> {
    type Pending<'a> = Result<(), TransportError> where Self: 'a;

    fn send(&mut self, payload: Payload) -> Result<(), TransportError> {
        match self {
            Self::Single(inner) => inner.send(payload),
            Self::Batch(inner) => inner.send(payload),
        }
    }

    fn close(&mut self) -> Result<(), TransportError> {
        match self {
            Self::Single(inner) => inner.close(),
            Self::Batch(inner) => inner.close(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpTransport<crate::http_client::BlockingClient> {
    /// The configured transport over a fresh blocking reqwest client.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = crate::http_client::BlockingClient::new(config)?;
        Ok(Self::with_client(client, config))
    }
}
