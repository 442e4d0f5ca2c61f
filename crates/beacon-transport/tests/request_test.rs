//! Blocking transports against a recording HTTP client.

use beacon_core::config::TransportConfig;
use beacon_core::constants::{BATCH_ENDPOINT, COLLECT_ENDPOINT, DEFAULT_USER_AGENT};
use beacon_core::errors::TransportError;
use beacon_core::Payload;
use beacon_transport::{encode_payload, HttpBatchRequest, HttpRequest, HttpTransport, Transport};
use test_fixtures::RecordingClient;

// ─── Helpers ───────────────────────────────────────────────

fn payload(key: &str, value: &str) -> Payload {
    [(key, value)].into_iter().collect()
}

fn numbered(n: usize) -> Payload {
    [("n", n.to_string())].into_iter().collect()
}

// ─── Single-hit transport ─────────────────────────────────

#[test]
fn http_request_posts_encoded_payload_to_collect() {
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpRequest::with_client(client, &TransportConfig::default());

    http.send(payload("foo", "bar")).unwrap();

    let request = log.last().unwrap();
    assert_eq!(request.url, COLLECT_ENDPOINT);
    assert_eq!(request.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(request.body, encode_payload(&[payload("foo", "bar")]));
}

#[test]
fn http_request_close_releases_client_once() {
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpRequest::with_client(client, &TransportConfig::default());

    http.close().unwrap();
    http.close().unwrap();
    drop(http);

    assert_eq!(log.close_calls(), 1);
}

#[test]
fn http_request_drop_closes_client() {
    let client = RecordingClient::new();
    let log = client.log();
    {
        let _http = HttpRequest::with_client(client, &TransportConfig::default());
    }
    assert_eq!(log.close_calls(), 1);
}

#[test]
fn http_request_send_after_close_fails() {
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpRequest::with_client(client, &TransportConfig::default());
    http.close().unwrap();

    assert_eq!(http.send(payload("a", "b")), Err(TransportError::Closed));
    assert_eq!(log.post_count(), 0);
}

#[test]
fn user_agent_and_endpoint_are_configurable() {
    let config = TransportConfig {
        user_agent: Some("my-app/1.0".to_string()),
        collect_endpoint: Some("http://localhost:8080/collect".to_string()),
        ..Default::default()
    };
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpRequest::with_client(client, &config);
    http.send(payload("t", "pageview")).unwrap();

    let request = log.last().unwrap();
    assert_eq!(request.url, "http://localhost:8080/collect");
    assert_eq!(request.user_agent, "my-app/1.0");
}

#[test]
fn network_errors_propagate_to_caller() {
    let client = RecordingClient::new();
    let log = client.log();
    log.fail_next(1);
    let mut http = HttpRequest::with_client(client, &TransportConfig::default());

    let err = http.send(payload("t", "event")).unwrap_err();
    assert!(matches!(err, TransportError::Network { .. }));
    // No retry.
    assert_eq!(log.post_count(), 1);
}

// ─── Batch transport ──────────────────────────────────────

#[test]
fn batch_request_joins_buffered_hits_on_close() {
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpBatchRequest::with_client(client, &TransportConfig::default());

    http.send(payload("foo", "bar")).unwrap();
    http.send(payload("bar", "foo")).unwrap();
    assert_eq!(log.post_count(), 0);
    assert_eq!(http.pending(), 2);

    http.close().unwrap();

    let request = log.last().unwrap();
    assert_eq!(request.url, BATCH_ENDPOINT);
    assert_eq!(request.body, "foo=bar\nbar=foo");
    assert_eq!(log.close_calls(), 1);
}

#[test]
fn batch_request_flushes_at_max_batch_size() {
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpBatchRequest::with_client(client, &TransportConfig::default());

    for n in 0..45 {
        http.send(numbered(n)).unwrap();
    }
    assert_eq!(log.batch_sizes(), vec![20, 20]);
    assert_eq!(http.pending(), 5);

    http.close().unwrap();
    assert_eq!(log.batch_sizes(), vec![20, 20, 5]);
}

#[test]
fn batch_request_preserves_send_order() {
    let config = TransportConfig {
        max_batch_size: Some(3),
        ..Default::default()
    };
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpBatchRequest::with_client(client, &config);
    for n in 0..3 {
        http.send(numbered(n)).unwrap();
    }
    assert_eq!(log.last().unwrap().body, "n=0\nn=1\nn=2");
}

#[test]
fn batch_request_close_with_empty_buffer_only_releases() {
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpBatchRequest::with_client(client, &TransportConfig::default());
    http.close().unwrap();

    assert_eq!(log.post_count(), 0);
    assert_eq!(log.close_calls(), 1);
}

#[test]
fn batch_request_drop_flushes_remainder() {
    let client = RecordingClient::new();
    let log = client.log();
    {
        let mut http = HttpBatchRequest::with_client(client, &TransportConfig::default());
        http.send(payload("t", "pageview")).unwrap();
    }
    assert_eq!(log.batch_sizes(), vec![1]);
    assert_eq!(log.close_calls(), 1);
}

#[test]
fn failed_flush_still_clears_the_batch() {
    let config = TransportConfig {
        max_batch_size: Some(2),
        ..Default::default()
    };
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpBatchRequest::with_client(client, &config);

    log.fail_next(1);
    http.send(numbered(1)).unwrap();
    assert!(http.send(numbered(2)).is_err());
    assert_eq!(http.pending(), 0);

    http.send(numbered(3)).unwrap();
    http.close().unwrap();
    assert_eq!(log.batch_sizes(), vec![2, 1]);
    assert_eq!(log.last().unwrap().body, "n=3");
}

#[test]
fn failed_final_flush_still_releases_client() {
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpBatchRequest::with_client(client, &TransportConfig::default());
    http.send(numbered(1)).unwrap();

    log.fail_next(1);
    assert!(http.close().is_err());
    assert_eq!(log.close_calls(), 1);
    assert!(http.is_closed());
}

#[test]
fn explicit_flush_posts_partial_batch() {
    let client = RecordingClient::new();
    let log = client.log();
    let mut http = HttpBatchRequest::with_client(client, &TransportConfig::default());
    http.send(numbered(1)).unwrap();
    http.flush().unwrap();
    http.flush().unwrap();

    assert_eq!(log.batch_sizes(), vec![1]);
    assert!(!http.is_closed());
}

// ─── Config-selected transport ────────────────────────────

#[test]
fn batch_flag_selects_the_batching_transport() {
    let single = HttpTransport::with_client(RecordingClient::new(), &TransportConfig::default());
    assert!(!single.is_batch());
    assert_eq!(single.endpoint(), COLLECT_ENDPOINT);

    let config = TransportConfig {
        batch: Some(true),
        max_batch_size: Some(2),
        ..TransportConfig::default()
    };
    let client = RecordingClient::new();
    let log = client.log();
    let mut batch = HttpTransport::with_client(client, &config);
    assert!(batch.is_batch());
    assert_eq!(batch.endpoint(), BATCH_ENDPOINT);

    for n in 0..3 {
        batch.send(numbered(n)).unwrap();
    }
    batch.close().unwrap();
    assert_eq!(log.batch_sizes(), vec![2, 1]);
}
