//! # beacon-transport
//!
//! Encodes resolved payloads into the measurement-protocol wire format and
//! POSTs them. Four transports share one [`Transport`] interface:
//!
//! | type                      | mode      | delivery |
//! |---------------------------|-----------|----------|
//! | [`HttpRequest`]           | blocking  | single   |
//! | [`HttpBatchRequest`]      | blocking  | batched  |
//! | [`AsyncHttpRequest`]      | async     | single   |
//! | [`AsyncHttpBatchRequest`] | async     | batched  |
//!
//! Batched transports buffer up to `max_batch_size` hits and flush the
//! whole buffer as one newline-joined body. Closing flushes what is left.
//! [`HttpTransport`] picks one of the blocking pair from `transport.batch`.

pub mod async_request;
pub mod batch;
pub mod configured;
pub mod encode;
#[cfg(feature = "http")]
pub mod http_client;
pub mod request;
pub mod transport;

pub use async_request::{AsyncHttpBatchRequest, AsyncHttpRequest};
pub use batch::BatchBuffer;
pub use configured::HttpTransport;
pub use encode::{encode_hit, encode_payload};
#[cfg(feature = "http")]
pub use http_client::{AsyncClient, BlockingClient};
pub use request::{HttpBatchRequest, HttpRequest};
pub use transport::{SendFuture, Transport};
