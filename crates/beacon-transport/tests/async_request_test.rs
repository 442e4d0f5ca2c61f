//! Async transports driven by a single-threaded tokio runtime.

use beacon_core::config::TransportConfig;
use beacon_core::constants::{BATCH_ENDPOINT, COLLECT_ENDPOINT};
use beacon_core::errors::TransportError;
use beacon_core::Payload;
use beacon_transport::{encode_payload, AsyncHttpBatchRequest, AsyncHttpRequest, Transport};
use test_fixtures::AsyncRecordingClient;

fn payload(key: &str, value: &str) -> Payload {
    [(key, value)].into_iter().collect()
}

#[tokio::test]
async fn async_request_posts_to_collect() {
    let client = AsyncRecordingClient::new();
    let log = client.log();
    let mut http = AsyncHttpRequest::with_client(client, &TransportConfig::default());

    http.send(payload("foo", "bar")).await.unwrap();
    http.close().await.unwrap();

    let request = log.last().unwrap();
    assert_eq!(request.url, COLLECT_ENDPOINT);
    assert_eq!(request.body, encode_payload(&[payload("foo", "bar")]));
    assert_eq!(log.close_calls(), 1);
}

#[tokio::test]
async fn async_request_send_after_close_fails() {
    let mut http =
        AsyncHttpRequest::with_client(AsyncRecordingClient::new(), &TransportConfig::default());
    http.close().await.unwrap();
    assert_eq!(http.send(payload("a", "b")).await, Err(TransportError::Closed));
}

#[tokio::test]
async fn nothing_is_sent_until_the_future_is_awaited() {
    let client = AsyncRecordingClient::new();
    let log = client.log();
    let mut http = AsyncHttpRequest::with_client(client, &TransportConfig::default());

    let pending = http.send(payload("t", "pageview"));
    assert_eq!(log.post_count(), 0);
    pending.await.unwrap();
    assert_eq!(log.post_count(), 1);
}

#[tokio::test]
async fn async_batch_request_joins_hits() {
    let client = AsyncRecordingClient::new();
    let log = client.log();
    let mut http = AsyncHttpBatchRequest::with_client(client, &TransportConfig::default());

    http.send(payload("foo", "bar")).await.unwrap();
    http.send(payload("bar", "foo")).await.unwrap();
    http.close().await.unwrap();

    let request = log.last().unwrap();
    assert_eq!(request.url, BATCH_ENDPOINT);
    assert_eq!(request.body, "foo=bar\nbar=foo");
    assert_eq!(log.close_calls(), 1);
}

#[tokio::test]
async fn async_batch_request_flush_sizes() {
    let client = AsyncRecordingClient::new();
    let log = client.log();
    let mut http = AsyncHttpBatchRequest::with_client(client, &TransportConfig::default());

    for _ in 0..50 {
        http.send(payload("foo", "bar")).await.unwrap();
    }
    http.close().await.unwrap();

    assert_eq!(log.batch_sizes(), vec![20, 20, 10]);
}

#[tokio::test]
async fn async_batch_close_releases_client_even_when_flush_fails() {
    let client = AsyncRecordingClient::new();
    let log = client.log();
    let mut http = AsyncHttpBatchRequest::with_client(client, &TransportConfig::default());
    http.send(payload("t", "event")).await.unwrap();

    log.fail_next(1);
    let err = http.close().await.unwrap_err();
    assert!(matches!(err, TransportError::Network { .. }));
    assert_eq!(log.close_calls(), 1);
    assert_eq!(http.pending(), 0);

    // Second close is a no-op.
    http.close().await.unwrap();
    assert_eq!(log.close_calls(), 1);
}
