//! The interface every hit transport implements.

use std::future::Future;
use std::pin::Pin;

use beacon_core::errors::TransportError;
use beacon_core::Payload;

/// Future returned by the async transports.
pub type SendFuture<'a> = Pin<Box<dyn Future<Output = Result<(), TransportError>> + 'a>>;

/// Delivers resolved payloads to the collection endpoint.
///
/// `Pending` is what a call hands back: a `Result` for blocking transports,
/// a [`SendFuture`] for async ones. Callers that hold a transport for its
/// whole lifetime should call `close` exactly once when done.
pub trait Transport {
    type Pending<'a>
    where
        Self: 'a;

    /// Deliver (or buffer) one payload.
    fn send(&mut self, payload: Payload) -> Self::Pending<'_>;

    /// Flush anything buffered, then release the HTTP client.
    fn close(&mut self) -> Self::Pending<'_>;
}
