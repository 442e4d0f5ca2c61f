//! Blocking transports: every call performs its I/O on the caller's thread.

use std::slice;

use beacon_core::config::TransportConfig;
use beacon_core::errors::TransportError;
use beacon_core::traits::{HttpClient, PostRequest};
use beacon_core::Payload;

use crate::batch::BatchBuffer;
use crate::encode::encode_payload;
use crate::transport::Transport;

/// POSTs each hit to the collect endpoint as soon as it is sent.
///
/// Closes itself on drop if `close` was never called.
#[derive(Debug)]
pub struct HttpRequest<C: HttpClient> {
    client: C,
    endpoint: String,
    user_agent: String,
    closed: bool,
}

impl<C: HttpClient> HttpRequest<C> {
    pub fn with_client(client: C, config: &TransportConfig) -> Self {
        Self {
            client,
            endpoint: config.effective_collect_endpoint().to_string(),
            user_agent: config.effective_user_agent().to_string(),
            closed: false,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn post(&mut self, payloads: &[Payload]) -> Result<(), TransportError> {
        let request = PostRequest {
            url: self.endpoint.clone(),
            user_agent: self.user_agent.clone(),
            body: encode_payload(payloads),
        };
        tracing::debug!(endpoint = %request.url, payload = %request.body, "request: POST");
        self.client.post(&request)
    }
}

impl<C: HttpClient> Transport for HttpRequest<C> {
    type Pending<'a> = Result<(), TransportError> where Self: 'a;

    fn send(&mut self, payload: Payload) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        self.post(slice::from_ref(&payload))
    }

    fn close(&mut self) -> Result<(), TransportError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        tracing::info!(endpoint = %self.endpoint, "transport: closed");
        self.client.close()
    }
}

impl<C: HttpClient> Drop for HttpRequest<C> {
    fn drop(&mut self) {
        if let Err(e) = Transport::close(self) {
            tracing::warn!("transport: close on drop failed: {e}");
        }
    }
}

/// Buffers hits and POSTs them to the batch endpoint, `max_batch_size`
/// at a time.
///
/// A batch is removed from the buffer before it is posted, so a failed
/// POST loses that batch rather than resending it. Flushes and closes
/// itself on drop if `close` was never called.
#[derive(Debug)]
pub struct HttpBatchRequest<C: HttpClient> {
    client: C,
    endpoint: String,
    user_agent: String,
    buffer: BatchBuffer,
    closed: bool,
}

impl<C: HttpClient> HttpBatchRequest<C> {
    pub fn with_client(client: C, config: &TransportConfig) -> Self {
        Self {
            client,
            endpoint: config.effective_batch_endpoint().to_string(),
            user_agent: config.effective_user_agent().to_string(),
            buffer: BatchBuffer::new(config.effective_max_batch_size()),
            closed: false,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Hits waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    pub fn max_batch_size(&self) -> usize {
        self.buffer.max_batch_size()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// POST whatever is buffered now, even if the batch is not full.
    pub fn flush(&mut self) -> Result<(), TransportError> {
        match self.buffer.take() {
            Some(batch) => self.post(&batch),
            None => Ok(()),
        }
    }

    fn post(&mut self, payloads: &[Payload]) -> Result<(), TransportError> {
        let request = PostRequest {
            url: self.endpoint.clone(),
            user_agent: self.user_agent.clone(),
            body: encode_payload(payloads),
        };
        tracing::debug!(
            endpoint = %request.url,
            hits = payloads.len(),
            payload = %request.body,
            "request: POST"
        );
        self.client.post(&request)
    }
}

impl<C: HttpClient> Transport for HttpBatchRequest<C> {
    type Pending<'a> = Result<(), TransportError> where Self: 'a;

    fn send(&mut self, payload: Payload) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        match self.buffer.push(payload) {
            Some(batch) => self.post(&batch),
            None => Ok(()),
        }
    }

    /// Flush the remainder, then release the client. The client is
    /// released even when the final flush fails; the flush error wins.
    fn close(&mut self) -> Result<(), TransportError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let flushed = self.flush();
        let released = self.client.close();
        tracing::info!(endpoint = %self.endpoint, "transport: closed");
        flushed.and(released)
    }
}

impl<C: HttpClient> Drop for HttpBatchRequest<C> {
    fn drop(&mut self) {
        if let Err(e) = Transport::close(self) {
            tracing::warn!("transport: close on drop failed: {e}");
        }
    }
}

#[cfg(feature = "http")]
mod default_client {
    use beacon_core::config::TransportConfig;
    use beacon_core::errors::TransportError;

    use super::{HttpBatchRequest, HttpRequest};
    use crate::http_client::BlockingClient;

    impl HttpRequest<BlockingClient> {
        /// A transport backed by a fresh blocking reqwest client.
        pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
            Ok(Self::with_client(BlockingClient::new(config)?, config))
        }
    }

    impl HttpBatchRequest<BlockingClient> {
        /// A batching transport backed by a fresh blocking reqwest client.
        pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
            Ok(Self::with_client(BlockingClient::new(config)?, config))
        }
    }
}
