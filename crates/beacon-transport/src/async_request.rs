//! Async transports: `send`/`close` return futures that suspend at the
//! network call and are driven by the caller's executor.

use std::slice;

use beacon_core::config::TransportConfig;
use beacon_core::errors::TransportError;
use beacon_core::traits::{AsyncHttpClient, PostRequest};
use beacon_core::Payload;

use crate::batch::BatchBuffer;
use crate::encode::encode_payload;
use crate::transport::{SendFuture, Transport};

/// POSTs each hit to the collect endpoint as soon as its future is awaited.
#[derive(Debug)]
pub struct AsyncHttpRequest<C: AsyncHttpClient> {
    client: C,
    endpoint: String,
    user_agent: String,
    closed: bool,
}

impl<C: AsyncHttpClient> AsyncHttpRequest<C> {
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

    async fn post(&mut self, payloads: &[Payload]) -> Result<(), TransportError> {
        let request = PostRequest {
            url: self.endpoint.clone(),
            user_agent: self.user_agent.clone(),
            body: encode_payload(payloads),
        };
        tracing::debug!(endpoint = %request.url, payload = %request.body, "request: POST");
        self.client.post(&request).await
    }
}

impl<C: AsyncHttpClient> Transport for AsyncHttpRequest<C> {
    type Pending<'a> = SendFuture<'a> where Self: 'a;

    fn send(&mut self, payload: Payload) -> SendFuture<'_> {
        Box::pin(async move {
            if self.closed {
                return Err(TransportError::Closed);
            }
            self.post(slice::from_ref(&payload)).await
        })
    }

    fn close(&mut self) -> SendFuture<'_> {
        Box::pin(async move {
            if self.closed {
                return Ok(());
            }
            self.closed = true;
            tracing::info!(endpoint = %self.endpoint, "transport: closed");
            self.client.close().await
        })
    }
}

impl<C: AsyncHttpClient> Drop for AsyncHttpRequest<C> {
    fn drop(&mut self) {
        if !self.closed {
            tracing::debug!(endpoint = %self.endpoint, "transport: dropped without close");
        }
    }
}

/// Buffers hits and POSTs them to the batch endpoint, `max_batch_size`
/// at a time.
///
/// Futures cannot be awaited in `Drop`: call `close().await` before
/// dropping, or buffered hits are lost (a warning is logged).
#[derive(Debug)]
pub struct AsyncHttpBatchRequest<C: AsyncHttpClient> {
    client: C,
    endpoint: String,
    user_agent: String,
    buffer: BatchBuffer,
    closed: bool,
}

impl<C: AsyncHttpClient> AsyncHttpBatchRequest<C> {
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
    pub async fn flush(&mut self) -> Result<(), TransportError> {
        match self.buffer.take() {
            Some(batch) => self.post(&batch).await,
            None => Ok(()),
        }
    }

    async fn post(&mut self, payloads: &[Payload]) -> Result<(), TransportError> {
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
        self.client.post(&request).await
    }
}

impl<C: AsyncHttpClient> Transport for AsyncHttpBatchRequest<C> {
    type Pending<'a> = SendFuture<'a> where Self: 'a;

    fn send(&mut self, payload: Payload) -> SendFuture<'_> {
        Box::pin(async move {
            if self.closed {
                return Err(TransportError::Closed);
            }
            match self.buffer.push(payload) {
                Some(batch) => self.post(&batch).await,
                None => Ok(()),
            }
        })
    }

    /// Flush the remainder, then release the client. The client is
    /// released even when the final flush fails; the flush error wins.
    fn close(&mut self) -> SendFuture<'_> {
        Box::pin(async move {
            if self.closed {
                return Ok(());
            }
            self.closed = true;
            let flushed = self.flush().await;
            let released = self.client.close().await;
            tracing::info!(endpoint = %self.endpoint, "transport: closed");
            flushed.and(released)
        })
    }
}

impl<C: AsyncHttpClient> Drop for AsyncHttpBatchRequest<C> {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            tracing::warn!(
                endpoint = %self.endpoint,
                hits = self.buffer.len(),
                "transport: dropped with unflushed hits; call close().await first"
            );
        }
    }
}

#[cfg(feature = "http")]
mod default_client {
    use beacon_core::config::TransportConfig;
    use beacon_core::errors::TransportError;

    use super::{AsyncHttpBatchRequest, AsyncHttpRequest};
    use crate::http_client::AsyncClient;

    impl AsyncHttpRequest<AsyncClient> {
        /// A transport backed by a fresh async reqwest client.
        pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
            Ok(Self::with_client(AsyncClient::new(config)?, config))
        }
    }

    impl AsyncHttpBatchRequest<AsyncClient> {
        /// A batching transport backed by a fresh async reqwest client.
        pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
            Ok(Self::with_client(AsyncClient::new(config)?, config))
        }
    }
}
